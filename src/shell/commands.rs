use thiserror::Error;

pub const USAGE: &str = "\
Commands:
  create <name> <data...>   create file (with replication)
  read <name>               read file (fault tolerant)
  files                     list files & replicas
  nodes                     show node status
  fail <id>                 simulate node FAILURE
  recover <id>              recover node
  help                      show this help
  exit                      quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { name: String, data: String },
    Read { name: String },
    ListFiles,
    ListNodes,
    Fail { node: usize },
    Recover { node: usize },
    Help,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Missing argument <{arg}> for '{command}'")]
    MissingArgument { command: &'static str, arg: &'static str },

    #[error("Invalid node id '{0}'")]
    InvalidNodeId(String),
}

impl Command {
    /// Parses one input line. The data of `create` is everything after the
    /// single separator that follows the name, whitespace included; only the
    /// line terminator is dropped.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim_end_matches(['\n', '\r']).trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line.trim_end(), ""),
        };

        match word {
            "" => Err(ParseError::Empty),
            "create" | "put" => {
                let (name, data) = match rest.split_once(char::is_whitespace) {
                    Some((name, data)) => (name, data),
                    None => (rest, ""),
                };
                Ok(Command::Create {
                    name: required("create", "name", name)?,
                    data: data.to_string(),
                })
            }
            "read" | "get" => Ok(Command::Read {
                name: required("read", "name", rest.trim())?,
            }),
            "files" | "ls" => Ok(Command::ListFiles),
            "nodes" | "status" => Ok(Command::ListNodes),
            "fail" => Ok(Command::Fail {
                node: node_id("fail", rest.trim())?,
            }),
            "recover" => Ok(Command::Recover {
                node: node_id("recover", rest.trim())?,
            }),
            "help" | "?" => Ok(Command::Help),
            "exit" | "quit" => Ok(Command::Exit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn required(command: &'static str, arg: &'static str, value: &str) -> Result<String, ParseError> {
    if value.is_empty() {
        Err(ParseError::MissingArgument { command, arg })
    } else {
        Ok(value.to_string())
    }
}

fn node_id(command: &'static str, value: &str) -> Result<usize, ParseError> {
    let value = required(command, "id", value)?;
    value.parse().map_err(|_| ParseError::InvalidNodeId(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_keeps_spaces_in_data() {
        assert_eq!(
            Command::parse("create notes hello  world ").unwrap(),
            Command::Create {
                name: "notes".to_string(),
                data: "hello  world ".to_string(),
            }
        );
        assert_eq!(
            Command::parse("create notes \t indented\r\n").unwrap(),
            Command::Create {
                name: "notes".to_string(),
                data: "\t indented".to_string(),
            }
        );
        assert_eq!(
            Command::parse("create empty").unwrap(),
            Command::Create {
                name: "empty".to_string(),
                data: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("files").unwrap(), Command::ListFiles);
        assert_eq!(Command::parse("  nodes\n").unwrap(), Command::ListNodes);
        assert_eq!(Command::parse("fail 2").unwrap(), Command::Fail { node: 2 });
        assert_eq!(Command::parse("recover 0").unwrap(), Command::Recover { node: 0 });
        assert_eq!(
            Command::parse("read a").unwrap(),
            Command::Read { name: "a".to_string() }
        );
        assert_eq!(Command::parse("quit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("fail 3 ").unwrap(), Command::Fail { node: 3 });
        assert_eq!(
            Command::parse("read a \r\n").unwrap(),
            Command::Read { name: "a".to_string() }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("   ").unwrap_err(), ParseError::Empty);
        assert_eq!(
            Command::parse("format c:").unwrap_err(),
            ParseError::Unknown("format".to_string())
        );
        assert_eq!(
            Command::parse("create").unwrap_err(),
            ParseError::MissingArgument { command: "create", arg: "name" }
        );
        assert_eq!(
            Command::parse("fail x").unwrap_err(),
            ParseError::InvalidNodeId("x".to_string())
        );
        assert_eq!(
            Command::parse("fail -1").unwrap_err(),
            ParseError::InvalidNodeId("-1".to_string())
        );
    }
}
