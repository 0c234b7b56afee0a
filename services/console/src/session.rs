//! Interactive session loop
//!
//! Reads one command per line, feeds accepted orders to the engine and
//! renders the outcome. Generic over reader and writer so tests can
//! drive a whole session from in-memory buffers.

use std::io::{self, BufRead, Write};

use matching_engine::{MatchingEngine, SubmitOutcome};

use crate::display;
use crate::parser::{self, Command};

/// Runs a session to completion.
///
/// Terminates on an `exit` command or end of input; both paths print the
/// farewell line. Malformed lines get the usage hint and the loop keeps
/// going. Book state survives in `engine` after the session ends.
pub fn run<R: BufRead, W: Write>(
    engine: &mut MatchingEngine,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    write!(output, "{}", display::banner(engine.pair()))?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", display::PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // End of input quits the same way "exit" does
            None => break,
        };

        match parser::parse_line(&line) {
            Ok(Command::Exit) => break,
            Ok(Command::Submit(order)) => {
                writeln!(output, "{}", display::processing_line(&order, engine.pair()))?;

                let result = engine.submit_order(order);
                tracing::debug!(
                    user = %order.user_id,
                    trades = result.trades.len(),
                    "order processed"
                );

                for (trade, changes) in result
                    .trades
                    .iter()
                    .zip(result.balance_changes.chunks(4))
                {
                    writeln!(output, "{}", display::matched_line(trade, engine.pair()))?;
                    writeln!(output, "{}", display::BALANCE_CHANGES_HEADER)?;
                    for change in changes {
                        writeln!(output, "{change}")?;
                    }
                }

                if let SubmitOutcome::Rested { remaining } = result.outcome {
                    writeln!(
                        output,
                        "{}",
                        display::remaining_line(remaining, order.side, engine.pair())
                    )?;
                }

                write!(output, "{}", display::order_book_dump(engine))?;
            }
            Err(error) => {
                tracing::debug!(line = %line, %error, "rejected input");
                writeln!(output, "{}", error.user_message())?;
            }
        }
    }

    writeln!(output, "Bye!")?;
    output.flush()?;
    Ok(())
}
