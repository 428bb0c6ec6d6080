use std::str::FromStr;

use common::games::snake::{Difficulty, Direction};

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Start,
    Retry,
    SetDifficulty(Difficulty),
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_ascii_lowercase();
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err("empty command".to_string());
        };

        let command = match verb {
            "w" | "up" => Command::Steer(Direction::Up),
            "s" | "down" => Command::Steer(Direction::Down),
            "a" | "left" => Command::Steer(Direction::Left),
            "d" | "right" => Command::Steer(Direction::Right),
            "start" => Command::Start,
            "retry" => Command::Retry,
            "quit" | "exit" => Command::Quit,
            "difficulty" => {
                let level = parts
                    .next()
                    .ok_or_else(|| "usage: difficulty <1-5>".to_string())?;
                Command::SetDifficulty(level.parse()?)
            }
            other => return Err(format!("unknown command '{}'", other)),
        };

        if parts.next().is_some() {
            return Err(format!("unexpected arguments after '{}'", verb));
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions() {
        assert_eq!("w".parse::<Command>().unwrap(), Command::Steer(Direction::Up));
        assert_eq!("A".parse::<Command>().unwrap(), Command::Steer(Direction::Left));
        assert_eq!(" down ".parse::<Command>().unwrap(), Command::Steer(Direction::Down));
        assert_eq!("right".parse::<Command>().unwrap(), Command::Steer(Direction::Right));
    }

    #[test]
    fn test_parse_scene_commands() {
        assert_eq!("start".parse::<Command>().unwrap(), Command::Start);
        assert_eq!("Retry".parse::<Command>().unwrap(), Command::Retry);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(
            "difficulty 4".parse::<Command>().unwrap(),
            Command::SetDifficulty(Difficulty::new(4).unwrap())
        );
        assert!("difficulty".parse::<Command>().is_err());
        assert!("difficulty 0".parse::<Command>().is_err());
        assert!("difficulty 2 3".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        assert!("".parse::<Command>().is_err());
        assert!("jump".parse::<Command>().is_err());
        assert!("w now".parse::<Command>().is_err());
    }
}
