//! Input line parsing
//!
//! One line is one command: either the exit word or a whitespace-separated
//! order `userId amount price buy|sell`. Validation happens here so the
//! engine only ever sees positive amounts and prices. User ids pass
//! through unchecked; zero and negative identities are legal.

use types::ids::UserId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use crate::error::ParseError;

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Submit this order to the engine
    Submit(Order),
    /// Terminate the session
    Exit,
}

/// Parse one input line into a command
///
/// The exit word matches the whole line case-insensitively; anything
/// else must be exactly four tokens. Leading whitespace before `exit`
/// is not stripped, so " exit" is a malformed order, not a quit.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    if line.eq_ignore_ascii_case("exit") {
        return Ok(Command::Exit);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(ParseError::WrongFieldCount(tokens.len()));
    }

    let user_id: i64 = tokens[0]
        .parse()
        .map_err(|_| ParseError::InvalidUserId(tokens[0].to_string()))?;
    let amount: i64 = tokens[1]
        .parse()
        .map_err(|_| ParseError::InvalidAmount(tokens[1].to_string()))?;
    let price: i64 = tokens[2]
        .parse()
        .map_err(|_| ParseError::InvalidPrice(tokens[2].to_string()))?;
    let side = match tokens[3].to_ascii_lowercase().as_str() {
        "buy" => Side::Buy,
        "sell" => Side::Sell,
        other => return Err(ParseError::InvalidSide(other.to_string())),
    };

    if amount <= 0 {
        return Err(ParseError::NonPositiveAmount(amount));
    }
    if price <= 0 {
        return Err(ParseError::NonPositivePrice(price));
    }

    Ok(Command::Submit(Order::new(
        UserId::new(user_id),
        Quantity::new(amount),
        Price::new(price),
        side,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_buy_order() {
        let command = parse_line("1 100 46 buy").unwrap();
        assert_eq!(
            command,
            Command::Submit(Order::new(
                UserId::new(1),
                Quantity::new(100),
                Price::new(46),
                Side::Buy,
            ))
        );
    }

    #[test]
    fn test_parse_sell_order() {
        let command = parse_line("2 50 46 sell").unwrap();
        assert_eq!(
            command,
            Command::Submit(Order::new(
                UserId::new(2),
                Quantity::new(50),
                Price::new(46),
                Side::Sell,
            ))
        );
    }

    #[test]
    fn test_parse_side_is_case_insensitive() {
        assert!(matches!(parse_line("1 100 46 BUY"), Ok(Command::Submit(_))));
        assert!(matches!(parse_line("1 100 46 Sell"), Ok(Command::Submit(_))));
    }

    #[test]
    fn test_parse_extra_whitespace_between_tokens() {
        let command = parse_line("  1   100  46   buy ").unwrap();
        assert!(matches!(command, Command::Submit(_)));
    }

    #[test]
    fn test_parse_negative_and_zero_user_ids_accepted() {
        assert!(matches!(parse_line("-7 100 46 buy"), Ok(Command::Submit(_))));
        assert!(matches!(parse_line("0 100 46 sell"), Ok(Command::Submit(_))));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse_line("exit"), Ok(Command::Exit));
        assert_eq!(parse_line("EXIT"), Ok(Command::Exit));
        assert_eq!(parse_line("Exit"), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_padded_exit_is_not_exit() {
        assert_eq!(parse_line(" exit"), Err(ParseError::WrongFieldCount(1)));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert_eq!(parse_line(""), Err(ParseError::WrongFieldCount(0)));
        assert_eq!(parse_line("1 100 46"), Err(ParseError::WrongFieldCount(3)));
        assert_eq!(
            parse_line("1 100 46 buy now"),
            Err(ParseError::WrongFieldCount(5))
        );
    }

    #[test]
    fn test_parse_non_integer_fields() {
        assert_eq!(
            parse_line("alice 100 46 buy"),
            Err(ParseError::InvalidUserId("alice".to_string()))
        );
        assert_eq!(
            parse_line("1 ten 46 buy"),
            Err(ParseError::InvalidAmount("ten".to_string()))
        );
        assert_eq!(
            parse_line("1 100 4.5 buy"),
            Err(ParseError::InvalidPrice("4.5".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_side() {
        assert_eq!(
            parse_line("1 100 46 hold"),
            Err(ParseError::InvalidSide("hold".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_non_positive_amount() {
        assert_eq!(parse_line("1 0 46 buy"), Err(ParseError::NonPositiveAmount(0)));
        assert_eq!(
            parse_line("1 -50 46 buy"),
            Err(ParseError::NonPositiveAmount(-50))
        );
    }

    #[test]
    fn test_parse_rejects_non_positive_price() {
        assert_eq!(parse_line("1 100 0 sell"), Err(ParseError::NonPositivePrice(0)));
        assert_eq!(
            parse_line("1 100 -46 sell"),
            Err(ParseError::NonPositivePrice(-46))
        );
    }
}
