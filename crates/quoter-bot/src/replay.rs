//! JSON-lines replay of recorded trading states.

use crate::error::AppResult;
use crate::trader::Trader;
use quoter_core::TradingState;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Run one step per input line and write each `StepOutput` as a JSON line.
///
/// Blank lines are ignored and malformed states are logged and skipped.
/// Returns the number of steps processed.
pub fn replay<R: BufRead, W: Write>(trader: &mut Trader, input: R, mut out: W) -> AppResult<usize> {
    let mut steps = 0;

    for (line_no, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let state = match TradingState::from_json(&line) {
            Ok(state) => state,
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "Skipping malformed trading state");
                continue;
            }
        };

        let output = trader.run(&state);
        serde_json::to_writer(&mut out, &output).map_err(io::Error::from)?;
        out.write_all(b"\n")?;
        steps += 1;
    }

    out.flush()?;
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::AppError;
    use crate::trader::StepOutput;

    fn trader() -> Trader {
        Trader::from_config(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_replay_writes_one_line_per_step() {
        let input = concat!(
            r#"{"timestamp":0,"order_depths":{"RAINFOREST_RESIN":{"buy_orders":{},"sell_orders":{"9998":-5}}}}"#,
            "\n\n",
            "not json\n",
            r#"{"timestamp":100,"order_depths":{"RAINFOREST_RESIN":{}},"position":{"RAINFOREST_RESIN":-20}}"#,
            "\n",
        );
        let mut out = Vec::new();

        let steps = replay(&mut trader(), input.as_bytes(), &mut out).unwrap();
        assert_eq!(steps, 2);

        let text = String::from_utf8(out).unwrap();
        let outputs: Vec<StepOutput> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].order_count(), 3);
        assert_eq!(outputs[1].order_count(), 1);
        assert_eq!(outputs[1].orders["RAINFOREST_RESIN"][0].quantity.inner(), 20);
    }

    #[test]
    fn test_replay_empty_input() {
        let mut out = Vec::new();
        assert_eq!(replay(&mut trader(), &b""[..], &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_replay_write_failure_is_io_error() {
        let input = r#"{"timestamp":0,"order_depths":{"RAINFOREST_RESIN":{}}}"#;
        let err = replay(&mut trader(), input.as_bytes(), BrokenPipe).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
