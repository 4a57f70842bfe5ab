//! Command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the engine main loop can dispatch on.

use super::notation::STARTPOS;

/// Search constraints passed with the `go` command.
///
/// Depth is kept signed so that a negative request reaches the engine and is
/// rejected there with a proper error instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoParams {
    pub depth: Option<i64>,
    pub movetime: Option<u64>,
}

/// A parsed collaborator-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake.
    Hello,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Forget the current position.
    NewGame,

    /// Set the board from a placement string, optionally with the side to search for.
    Position {
        placement: String,
        side: Option<String>,
    },

    /// Search the current position and report the best move.
    Go(GoParams),

    /// Report the static evaluation of the current position.
    Eval,

    /// Print the current position as a diagram.
    Display,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "hello" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "eval" => Some(Command::Eval),
        "display" | "d" => Some(Command::Display),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "go" => parse_go(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`. Both the id and the value may
/// span several tokens; a missing or empty value leaves it unset.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    let rest = match tokens {
        [_, "name", rest @ ..] if !rest.is_empty() => rest,
        _ => {
            eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
            return None;
        }
    };

    let (id, value): (&[&str], &[&str]) = match rest.iter().position(|&t| t == "value") {
        Some(0) => {
            eprintln!("malformed setoption: missing option name");
            return None;
        }
        Some(split) => (&rest[..split], &rest[split + 1..]),
        None => (rest, &[][..]),
    };

    Some(Command::SetOption {
        name: id.join(" "),
        value: (!value.is_empty()).then(|| value.join(" ")),
    })
}

/// Parses `position startpos|<placement> [side]`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 || tokens.len() > 3 {
        eprintln!("malformed position: expected 'position <placement|startpos> [side]'");
        return None;
    }
    let placement = match tokens[1] {
        "startpos" => STARTPOS.to_string(),
        other => other.to_string(),
    };
    let side = tokens.get(2).map(|s| s.to_string());
    Some(Command::Position { placement, side })
}

/// Parses `go [depth <n>] [movetime <ms>]`.
fn parse_go(tokens: &[&str]) -> Option<Command> {
    let mut params = GoParams::default();
    let mut i = 1;

    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                i += 1;
                if i < tokens.len() {
                    match tokens[i].parse::<i64>() {
                        Ok(v) => params.depth = Some(v),
                        Err(_) => {
                            eprintln!("invalid depth value: '{}'", tokens[i]);
                        }
                    }
                }
            }
            "movetime" => {
                i += 1;
                if i < tokens.len() {
                    match tokens[i].parse::<u64>() {
                        Ok(v) => params.movetime = Some(v),
                        Err(_) => {
                            eprintln!("invalid movetime value: '{}'", tokens[i]);
                        }
                    }
                }
            }
            other => {
                eprintln!("unknown go parameter: '{}'", other);
            }
        }
        i += 1;
    }

    Some(Command::Go(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("hello"), Some(Command::Hello));
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("eval"), Some(Command::Eval));
        assert_eq!(parse_command("display"), Some(Command::Display));
        assert_eq!(parse_command("d"), Some(Command::Display));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("castle"), None);
    }

    #[test]
    fn parse_setoption_with_value() {
        let cmd = parse_command("setoption name Difficulty value hard").unwrap();
        assert_eq!(
            cmd,
            Command::SetOption {
                name: "Difficulty".to_string(),
                value: Some("hard".to_string()),
            }
        );
    }

    #[test]
    fn parse_setoption_no_value() {
        let cmd = parse_command("setoption name Parallel").unwrap();
        assert_eq!(
            cmd,
            Command::SetOption {
                name: "Parallel".to_string(),
                value: None,
            }
        );
    }

    #[test]
    fn parse_setoption_multi_token_name_and_empty_value() {
        assert_eq!(
            parse_command("setoption name Move Time value 250 ms"),
            Some(Command::SetOption {
                name: "Move Time".to_string(),
                value: Some("250 ms".to_string()),
            })
        );
        assert_eq!(
            parse_command("setoption name Rules value"),
            Some(Command::SetOption {
                name: "Rules".to_string(),
                value: None,
            })
        );
    }

    #[test]
    fn parse_setoption_malformed_returns_none() {
        assert_eq!(parse_command("setoption"), None);
        assert_eq!(parse_command("setoption foo"), None);
        assert_eq!(parse_command("setoption name value 3"), None);
    }

    #[test]
    fn parse_position_startpos() {
        let cmd = parse_command("position startpos").unwrap();
        assert_eq!(
            cmd,
            Command::Position {
                placement: STARTPOS.to_string(),
                side: None,
            }
        );
    }

    #[test]
    fn parse_position_with_side() {
        let cmd = parse_command("position 8/8/8/8/8/8/p7/K7 dark").unwrap();
        assert_eq!(
            cmd,
            Command::Position {
                placement: "8/8/8/8/8/8/p7/K7".to_string(),
                side: Some("dark".to_string()),
            }
        );
    }

    #[test]
    fn parse_position_malformed_returns_none() {
        assert_eq!(parse_command("position"), None);
        assert_eq!(parse_command("position startpos light extra"), None);
    }

    #[test]
    fn parse_go_no_params() {
        assert_eq!(parse_command("go"), Some(Command::Go(GoParams::default())));
    }

    #[test]
    fn parse_go_depth_and_movetime() {
        let cmd = parse_command("go depth 2 movetime 500").unwrap();
        assert_eq!(
            cmd,
            Command::Go(GoParams {
                depth: Some(2),
                movetime: Some(500),
            })
        );
    }

    #[test]
    fn parse_go_keeps_negative_depth() {
        let cmd = parse_command("go depth -1").unwrap();
        assert_eq!(
            cmd,
            Command::Go(GoParams {
                depth: Some(-1),
                movetime: None,
            })
        );
    }

    #[test]
    fn parse_go_ignores_bad_values() {
        let cmd = parse_command("go depth deep infinite").unwrap();
        assert_eq!(cmd, Command::Go(GoParams::default()));
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  hello  "), Some(Command::Hello));
    }
}
