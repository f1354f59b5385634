use wythoff_engine::{Outcome, Position};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ClassifyArg {
    /// Size of the first pile
    first: u32,
    /// Size of the second pile
    second: u32,
}

pub(crate) fn run(arg: &ClassifyArg) -> anyhow::Result<()> {
    let position = Position::new(arg.first, arg.second);
    for line in describe(position)? {
        println!("{line}");
    }
    Ok(())
}

fn describe(position: Position) -> anyhow::Result<Vec<String>> {
    let outcome = match position.outcome() {
        Outcome::Losing => "losing",
        Outcome::Winning => "winning",
    };
    let mut lines = vec![format!("{position}: {outcome} for the player to move")];
    if position.is_terminal() {
        lines.push("No moves left: the previous player has won.".to_owned());
        return Ok(lines);
    }
    let selection = wythoff_engine::select(position);
    let next = position.apply(selection.mv)?;
    lines.push(format!(
        "Selected move: {} ({:?}) -> {next}",
        selection.mv, selection.shape
    ));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_winning_position() {
        let lines = describe(Position::new(2, 3)).unwrap();
        assert_eq!(
            lines,
            [
                "(2, 3): winning for the player to move",
                "Selected move: (-0, -2) (ReduceLarger) -> (2, 1)",
            ]
        );
    }

    #[test]
    fn test_describe_losing_position() {
        let lines = describe(Position::new(5, 3)).unwrap();
        assert_eq!(lines[0], "(5, 3): losing for the player to move");
        assert_eq!(lines[1], "Selected move: (-1, -1) (Minimal) -> (4, 2)");
    }

    #[test]
    fn test_describe_terminal_position() {
        let lines = describe(Position::TERMINAL).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("losing"));
    }
}
