//! Interactive preference questions for `yuletide plan --interactive`

use std::io::{self, BufRead, Write};

use colored::Colorize;
use yuletide::api::{BudgetInput, PlanRequest};

pub const BUDGET_CHOICES: [&str; 3] = ["Budget-friendly", "Mid-range", "Luxury"];
pub const PACE_CHOICES: [&str; 3] = ["relaxed", "moderate", "intense"];
pub const COMPANION_CHOICES: [&str; 5] = ["Solo", "Couple", "Family", "Friends", "Group"];
pub const LANGUAGE_CHOICES: [&str; 3] = ["en", "de", "fr"];
pub const INTEREST_OPTIONS: &str =
    "food, culture, shopping, family-friendly, nightlife, history, architecture";

/// Line-oriented question asker over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a free-text question; blank answers and end of input yield the default
    pub fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        Ok(self
            .read_answer(question, default)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// The trimmed answer (default when blank), or `None` at end of input
    fn read_answer(&mut self, question: &str, default: &str) -> io::Result<Option<String>> {
        if default.is_empty() {
            write!(self.output, "{} ", question.bold())?;
        } else {
            write!(self.output, "{} [{}] ", question.bold(), default.dimmed())?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let answer = line.trim();
        Ok(Some(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        }))
    }

    /// Ask until the answer matches one of `choices` (case-insensitive)
    pub fn choose(&mut self, question: &str, choices: &[&str], default: &str) -> io::Result<String> {
        let question = format!("{question} ({})", choices.join("/"));
        loop {
            let answer = self.read_answer(&question, default)?;
            let candidate = answer.as_deref().unwrap_or(default);
            if let Some(choice) = choices.iter().find(|c| c.eq_ignore_ascii_case(candidate)) {
                return Ok((*choice).to_string());
            }
            if answer.is_none() {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("'{candidate}' is not one of: {}", choices.join(", ")),
                ));
            }
            writeln!(
                self.output,
                "{} Please pick one of: {}",
                "!".yellow(),
                choices.join(", ")
            )?;
        }
    }

    pub fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let answer = self.ask(&format!("{question} ({hint})"), "")?;
        Ok(match answer.to_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }

    /// Walk through every trip question, starting from what was already given
    pub fn collect(&mut self, seed: PlanRequest, default_departure: &str) -> io::Result<PlanRequest> {
        writeln!(
            self.output,
            "{}",
            "Tell me about your Christmas market trip.".green().bold()
        )?;

        let departure_city = self.ask(
            "Where will you be travelling from?",
            seed.departure_city.as_deref().unwrap_or(default_departure),
        )?;
        let start_date = self.ask(
            "First day of the trip (YYYY-MM-DD, blank for undated)?",
            seed.start_date.as_deref().unwrap_or(""),
        )?;
        let default_days = seed.duration_days.filter(|d| *d > 0).unwrap_or(5).to_string();
        let days = loop {
            let answer = self.ask("How many days?", &default_days)?;
            match answer.trim_end_matches("days").trim().parse::<u32>() {
                Ok(days) if days > 0 => break days,
                _ => writeln!(self.output, "{} Please enter a whole number of days", "!".yellow())?,
            }
        };
        let budget = self.choose(
            "What is your budget?",
            &BUDGET_CHOICES,
            &seed.budget.as_ref().map_or_else(|| "Mid-range".to_string(), BudgetInput::label),
        )?;
        let default_interests = if seed.interests.is_empty() {
            "food, culture".to_string()
        } else {
            seed.interests.join(", ")
        };
        let interests = self.ask(
            &format!("What are you interested in? ({INTEREST_OPTIONS})"),
            &default_interests,
        )?;
        let pace = self.choose(
            "Preferred pace?",
            &PACE_CHOICES,
            seed.pace.as_deref().unwrap_or("moderate"),
        )?;
        let companions = self.choose(
            "Who is travelling?",
            &COMPANION_CHOICES,
            seed.travel_companions.as_deref().unwrap_or("Couple"),
        )?;
        let language = self.choose(
            "Answer language?",
            &LANGUAGE_CHOICES,
            seed.language.as_deref().unwrap_or("en"),
        )?;

        Ok(PlanRequest {
            start_date: Some(start_date).filter(|s| !s.is_empty()),
            end_date: None,
            duration_days: Some(days),
            departure_city: Some(departure_city),
            budget: Some(BudgetInput::Label(budget)),
            interests: split_interests(&interests),
            pace: Some(pace),
            language: Some(language),
            travel_companions: Some(companions),
        })
    }
}

/// Comma-separated interests, blanks dropped
pub fn split_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_blank_answers_take_defaults() {
        let mut p = prompter("\n\n\n\n\n\n\n\n");
        let request = p.collect(PlanRequest::default(), "Berlin").unwrap();

        assert_eq!(request.departure_city.as_deref(), Some("Berlin"));
        assert_eq!(request.start_date, None);
        assert_eq!(request.duration_days, Some(5));
        assert_eq!(request.budget, Some(BudgetInput::Label("Mid-range".to_string())));
        assert_eq!(request.interests, vec!["food", "culture"]);
        assert_eq!(request.pace.as_deref(), Some("moderate"));
        assert_eq!(request.travel_companions.as_deref(), Some("Couple"));
        assert_eq!(request.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_invalid_choice_is_asked_again() {
        let mut p = prompter("cheap\nluxury\n");
        let budget = p.choose("Budget?", &BUDGET_CHOICES, "Mid-range").unwrap();
        assert_eq!(budget, "Luxury");

        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("Please pick one of: Budget-friendly, Mid-range, Luxury"));
    }

    #[test]
    fn test_invalid_default_must_be_replaced() {
        let mut p = prompter("\nbudget-friendly\n");
        let budget = p.choose("Budget?", &BUDGET_CHOICES, "cheap").unwrap();
        assert_eq!(budget, "Budget-friendly");

        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("Please pick one of"));
    }

    #[test]
    fn test_invalid_default_at_end_of_input_is_an_error() {
        let err = prompter("").choose("Budget?", &BUDGET_CHOICES, "cheap").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_default_is_normalised_to_choice_spelling() {
        let answer = prompter("\n").choose("Pace?", &PACE_CHOICES, "Relaxed").unwrap();
        assert_eq!(answer, "relaxed");
    }

    #[test]
    fn test_answers_override_defaults() {
        let mut p = prompter("Hamburg\n2025-12-01\n4 days\nLuxury\nhistory, music\nrelaxed\nFamily\nde\n");
        let request = p.collect(PlanRequest::default(), "Berlin").unwrap();

        assert_eq!(request.departure_city.as_deref(), Some("Hamburg"));
        assert_eq!(request.start_date.as_deref(), Some("2025-12-01"));
        assert_eq!(request.duration_days, Some(4));
        assert_eq!(request.interests, vec!["history", "music"]);
        assert_eq!(request.language.as_deref(), Some("de"));
    }

    #[test]
    fn test_confirm_defaults_on_eof() {
        assert!(prompter("").confirm("Ready?", true).unwrap());
        assert!(!prompter("no\n").confirm("Ready?", true).unwrap());
    }
}
