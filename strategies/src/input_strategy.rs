use std::{
    fmt,
    io::{self, BufRead, Write},
};

use itertools::Itertools;
use regex::Regex;
use types::{
    game_state::PublicInfo, Action, Direction, Event, PlayerState, Strategy, StrategyError,
};
use uuid::Uuid;

/// Asks a human for each move over a line-based console.
///
/// Without an explicit reader the strategy reads from the process's shared
/// stdin handle, so several seats can take turns at the same terminal.
pub struct InputStrategy {
    input: Option<Box<dyn BufRead>>,
    output: Box<dyn Write>,
    move_re: Regex,
}

fn move_regex() -> Regex {
    Regex::new(r"^\s*(?:(?<index>[+-]?\d+)|(?i:(?<draw>draw|d)))\s*$")
        .expect("Valid move regex")
}

impl Default for InputStrategy {
    fn default() -> Self {
        Self {
            input: None,
            output: Box::new(io::stdout()),
            move_re: move_regex(),
        }
    }
}

impl fmt::Debug for InputStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputStrategy")
            .field("stdin", &self.input.is_none())
            .finish()
    }
}

impl InputStrategy {
    pub fn with_io(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Some(Box::new(input)),
            output: Box::new(output),
            move_re: move_regex(),
        }
    }

    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        match self.input.as_mut() {
            Some(reader) => reader.read_line(buf),
            None => io::stdin().read_line(buf),
        }
    }
}

impl Strategy for InputStrategy {
    fn select_action(
        &mut self,
        private_info: &PlayerState,
        public_info: &PublicInfo,
        available_actions: &[Action],
    ) -> Result<Action, StrategyError> {
        print_public_info(&mut self.output, private_info, public_info)?;
        print_hand(&mut self.output, private_info)?;

        let mut buf = String::new();
        loop {
            writeln!(
                self.output,
                "Enter the index of the card you want to play (or -1 to draw a card):"
            )?;
            self.output.flush()?;

            buf.clear();
            if self.read_line(&mut buf)? == 0 {
                return Err(StrategyError::InputClosed);
            }
            match select_action_from_str(&self.move_re, &buf, private_info, available_actions)? {
                Ok(action) => return Ok(action),
                Err(complaint) => {
                    log::error!(
                        "Rejected move {:?} from {}: {complaint}",
                        buf.trim(),
                        private_info.name
                    );
                    writeln!(self.output, "{complaint}")?;
                }
            }
        }
    }
}

fn print_public_info(
    out: &mut dyn Write,
    private_info: &PlayerState,
    info: &PublicInfo,
) -> io::Result<()> {
    writeln!(out, "\n--- Game Status ---")?;
    if let Some(&Event::Drew { card, .. }) = info.last_move(private_info.id) {
        writeln!(out, "You drew a card: {card}")?;
    }
    for event in info.events_since_last_turn(private_info.id) {
        writeln!(out, "{}", describe_event(event, private_info.id, info))?;
    }
    let table = info
        .public_table
        .iter()
        .map(|p| format!("{} ({} cards)", p.name, p.hand_size))
        .join(", ");
    writeln!(out, "Table: {table}")?;
    let direction = match info.direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    };
    writeln!(out, "Turn order: {direction}")?;
    writeln!(out, "Cards left to draw: {}", info.draw_pile_size)?;
    writeln!(out, "Top card on discard pile: {}", info.top_card)
}

fn print_hand(out: &mut dyn Write, private_info: &PlayerState) -> io::Result<()> {
    writeln!(out, "\n--- {}'s Turn ---", private_info.name)?;
    writeln!(out, "Your hand:")?;
    for (idx, card) in private_info.current_hand.iter().enumerate() {
        writeln!(out, "{idx}. {card}")?;
    }
    Ok(())
}

/// Other players' draws stay face down; `viewer` sees the cards they drew.
fn describe_event(event: &Event, viewer: Uuid, info: &PublicInfo) -> String {
    let name = |id| info.player_name(id).unwrap_or("Someone").to_string();
    match *event {
        Event::Played { player_id, card } => format!("{} played {card}", name(player_id)),
        Event::Drew {
            player_id, card, ..
        } if player_id == viewer => format!("You drew a card: {card}"),
        Event::Drew { player_id, .. } => format!("{} drew a card", name(player_id)),
        Event::Skipped { player_id } => format!("Next player ({}) is skipped!", name(player_id)),
        Event::Reversed => "The sequence of turns is reversed!".to_string(),
        Event::ForcedDraw { player_id, count } => {
            format!("{} has to draw {count} cards!", name(player_id))
        }
        Event::DrawPileEmpty { .. } => "The draw pile is empty!".to_string(),
        Event::Won { player_id } => format!("Player {} wins!", name(player_id)),
    }
}

/// The outer `Result` is fatal (unparseable input); the inner one carries a
/// complaint to show before asking again.
fn select_action_from_str(
    re: &Regex,
    input: &str,
    private_info: &PlayerState,
    actions: &[Action],
) -> Result<Result<Action, String>, StrategyError> {
    let Some(caps) = re.captures(input) else {
        return Err(StrategyError::MalformedInput(input.trim().to_string()));
    };
    if caps.name("draw").is_some() {
        return Ok(Ok(Action::Draw));
    }

    let index_str = caps
        .name("index")
        .expect("Either draw or index matched")
        .as_str();
    let Ok(index) = index_str.parse::<i64>() else {
        return Ok(Err("Invalid index! Please enter a valid index.".to_string()));
    };
    if index == -1 {
        return Ok(Ok(Action::Draw));
    }

    let card = usize::try_from(index)
        .ok()
        .and_then(|idx| private_info.current_hand.get(idx));
    let Some(&card) = card else {
        return Ok(Err("Invalid index! Please enter a valid index.".to_string()));
    };

    let action = Action::Play(card);
    if actions.contains(&action) {
        log::debug!("Index {index} selected {card}");
        Ok(Ok(action))
    } else {
        Ok(Err(
            "Invalid card! It should match the suit or rank of the top card.".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, io::Cursor, rc::Rc};

    use types::{Card, PublicPlayerState, Rank, Suit};

    use super::*;

    fn player() -> PlayerState {
        let mut state = PlayerState::new("Alice".to_string());
        state.add_card_to_hand(Card::new(Rank::Two, Suit::Clubs));
        state.add_card_to_hand(Card::new(Rank::Nine, Suit::Hearts));
        state.add_card_to_hand(Card::new(Rank::Five, Suit::Spades));
        state
    }

    fn public_info(state: &PlayerState, top_card: Card) -> PublicInfo {
        PublicInfo {
            top_card,
            draw_pile_size: 30,
            direction: Direction::Clockwise,
            history: vec![],
            public_table: vec![PublicPlayerState::from(state)],
        }
    }

    fn run(input: &str) -> Result<Action, StrategyError> {
        let state = player();
        let top_card = Card::new(Rank::Nine, Suit::Diamonds);
        let info = public_info(&state, top_card);
        let actions = vec![
            Action::Play(Card::new(Rank::Nine, Suit::Hearts)),
            Action::Draw,
        ];
        let mut strategy = InputStrategy::with_io(Cursor::new(input.to_string()), io::sink());
        strategy.select_action(&state, &info, &actions)
    }

    #[test]
    fn picks_a_matching_card_by_index() {
        assert_eq!(
            run("1\n").expect("Valid move"),
            Action::Play(Card::new(Rank::Nine, Suit::Hearts))
        );
    }

    #[test]
    fn minus_one_or_the_word_draws() {
        assert_eq!(run("-1\n").expect("Valid move"), Action::Draw);
        assert_eq!(run("  DRAW \n").expect("Valid move"), Action::Draw);
    }

    #[test]
    fn reprompts_on_bad_index_and_non_matching_card() {
        // out of range, negative, then a card that doesn't match the top card
        assert_eq!(
            run("7\n-3\n0\n1\n").expect("Eventually valid"),
            Action::Play(Card::new(Rank::Nine, Suit::Hearts))
        );
    }

    #[test]
    fn many_rejections_do_not_grow_the_stack() {
        let input = "9\n".repeat(100_000) + "-1\n";
        assert_eq!(run(&input).expect("Eventually valid"), Action::Draw);
    }

    #[test]
    fn non_numeric_input_is_fatal() {
        assert!(matches!(
            run("play the nine\n"),
            Err(StrategyError::MalformedInput(s)) if s == "play the nine"
        ));
    }

    #[test]
    fn closed_input_is_fatal() {
        assert!(matches!(run(""), Err(StrategyError::InputClosed)));
        assert!(matches!(run("5\n"), Err(StrategyError::InputClosed)));
    }

    #[test]
    fn describes_events_by_name() {
        let state = player();
        let mut info = public_info(&state, Card::new(Rank::Two, Suit::Hearts));
        info.history.push(Event::Skipped {
            player_id: state.id,
        });
        assert_eq!(
            describe_event(&info.history[0], state.id, &info),
            "Next player (Alice) is skipped!"
        );
        assert_eq!(
            describe_event(&Event::Reversed, state.id, &info),
            "The sequence of turns is reversed!"
        );
    }

    #[test]
    fn only_the_drawer_sees_the_drawn_card() {
        let state = player();
        let info = public_info(&state, Card::new(Rank::Two, Suit::Hearts));
        let drew = Event::Drew {
            player_id: state.id,
            card: Card::new(Rank::Seven, Suit::Spades),
            forced: true,
        };
        assert_eq!(
            describe_event(&drew, state.id, &info),
            "You drew a card: SEVEN of SPADES"
        );
        assert_eq!(
            describe_event(&drew, Uuid::new_v4(), &info),
            "Alice drew a card"
        );
    }

    /// A `Write` the test can read back after handing it to the strategy.
    #[derive(Clone, Default)]
    struct SharedOutput(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedOutput {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    #[test]
    fn status_shows_own_voluntary_draw_and_turn_order() {
        let state = player();
        let mut info = public_info(&state, Card::new(Rank::Nine, Suit::Diamonds));
        info.direction = Direction::CounterClockwise;
        info.history.push(Event::Drew {
            player_id: state.id,
            card: Card::new(Rank::Five, Suit::Spades),
            forced: false,
        });
        let output = SharedOutput::default();
        let mut strategy =
            InputStrategy::with_io(Cursor::new("-1\n".to_string()), output.clone());

        strategy
            .select_action(&state, &info, &[Action::Draw])
            .expect("Valid move");

        let text = output.text();
        assert!(text.contains("You drew a card: FIVE of SPADES"), "{text}");
        assert!(text.contains("Turn order: counter-clockwise"), "{text}");
    }
}
