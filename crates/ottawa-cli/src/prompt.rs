use std::io::{BufRead, Write};

use ottawa_core::{ReferenceContent, Stage};
use ottawa_flow::{FlowController, StepOutcome, StepTest};
use ottawa_rules::{ResultSummary, summarize};

/// What the patient typed at a prompt.
enum Reply {
    Line(String),
    Restart,
}

fn read_reply<R: BufRead>(input: &mut R) -> eyre::Result<Reply> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(eyre::eyre!("input closed before the assessment finished"));
    }
    let line = line.trim().to_lowercase();
    if line == "r" || line == "restart" {
        return Ok(Reply::Restart);
    }
    Ok(Reply::Line(line))
}

/// Show the disclaimer and wait for the patient to accept it.
fn confirm_disclaimer<R: BufRead, W: Write>(
    content: &ReferenceContent,
    input: &mut R,
    out: &mut W,
) -> eyre::Result<()> {
    writeln!(out, "Important Disclaimer")?;
    writeln!(out, "{}", content.disclaimer)?;
    writeln!(
        out,
        "If you have severe pain, deformity, or bleeding, seek emergency care immediately."
    )?;
    loop {
        writeln!(out, "Type 'y' if you understand, or 'n' to quit. [y/n]")?;
        match read_reply(input)? {
            Reply::Line(line) if line == "y" || line == "yes" => return Ok(()),
            Reply::Line(line) if line == "n" || line == "no" => {
                return Err(eyre::eyre!("disclaimer was not accepted"));
            }
            _ => {}
        }
    }
}

/// Walk one patient through the assessment and return the summary.
///
/// The disclaimer must be accepted first. Typing `r` at any later prompt
/// abandons the session and starts over.
pub fn run<R: BufRead, W: Write>(
    content: &ReferenceContent,
    input: &mut R,
    out: &mut W,
) -> eyre::Result<ResultSummary> {
    confirm_disclaimer(content, input, out)?;
    let mut flow = FlowController::from_content(content);

    'assessment: loop {
        let target = content.step_target;
        writeln!(out, "Step Test: can you walk {target} complete steps without assistance?")?;
        writeln!(out, "Limping counts, but you must transfer weight.")?;
        writeln!(out, "Press Enter for each step, or type 'x' if you cannot walk {target} steps.")?;

        let mut test = StepTest::new(target);
        test.start();
        loop {
            let outcome = match read_reply(input)? {
                Reply::Restart => {
                    flow.reset();
                    continue 'assessment;
                }
                Reply::Line(line) if line == "x" => test.give_up(),
                Reply::Line(_) => test.record_step(),
            };
            if let StepOutcome::Counting { count, target } = outcome {
                writeln!(out, "{count} / {target} steps")?;
                continue;
            }
            flow.apply_step_outcome(outcome)?;
            break;
        }

        while let Some(Stage::Palpation { zone }) = flow.current_stage() {
            writeln!(
                out,
                "Press on the {} ({}). Does it hurt? [y/n]",
                zone.name, zone.anatomy_note
            )?;
            let has_pain = loop {
                match read_reply(input)? {
                    Reply::Restart => {
                        flow.reset();
                        continue 'assessment;
                    }
                    Reply::Line(line) if line == "y" || line == "yes" => break true,
                    Reply::Line(line) if line == "n" || line == "no" => break false,
                    Reply::Line(_) => writeln!(out, "Please answer y or n.")?,
                }
            };
            flow.record_palpation(&zone.id, has_pain)?;
        }

        for event in flow.drain_events() {
            tracing::debug!(?event, "flow event");
        }
        return Ok(summarize(flow.session(), flow.zones(), content)?);
    }
}
