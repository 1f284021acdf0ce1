//! Line-oriented front end for a [`MovieRepository`].
//!
//! Turns typed text into the typed arguments the store expects and reports
//! the store's boolean and numeric answers back as messages.

use crate::core::import::parse_available;
use crate::core::{ConfigProvider, Movie, MovieRepository};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "> ";

pub const HELP: &str = "\
Commands:
  add <title>,<genre>,<year>,<rating>,<duration>,<available>
  update <title>,<genre>,<year>,<rating>,<duration>,<available>
  delete <title>
  find <title>
  list
  avg
  load <path>
  help
  quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
struct MovieInput {
    title: String,
    genre: String,
    year: i32,
    rating: f64,
    duration: i32,
    available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum InputError {
    Usage,
    TitleRequired,
    GenreRequired,
    NumberFormat,
}

/// Same tolerance as the import format for `available`: only `true` counts.
fn parse_movie_args(args: &str) -> std::result::Result<MovieInput, InputError> {
    let fields: Vec<&str> = args.split(',').map(str::trim).collect();
    let [title, genre, year, rating, duration, available] = fields.as_slice() else {
        return Err(InputError::Usage);
    };

    if title.is_empty() {
        return Err(InputError::TitleRequired);
    }
    if genre.is_empty() {
        return Err(InputError::GenreRequired);
    }

    Ok(MovieInput {
        title: title.to_string(),
        genre: genre.to_string(),
        year: year.parse().map_err(|_| InputError::NumberFormat)?,
        rating: rating.parse().map_err(|_| InputError::NumberFormat)?,
        duration: duration.parse().map_err(|_| InputError::NumberFormat)?,
        available: parse_available(available),
    })
}

pub struct Shell<'a, R: MovieRepository> {
    repo: &'a mut R,
    json: bool,
    precision: usize,
}

impl<'a, R: MovieRepository> Shell<'a, R> {
    pub fn new(repo: &'a mut R, json: bool, precision: usize) -> Self {
        Self {
            repo,
            json,
            precision,
        }
    }

    pub fn with_config<C: ConfigProvider>(repo: &'a mut R, config: &C) -> Self {
        Self::new(repo, config.json_output(), config.precision())
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, mut output: W) -> Result<()> {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            match self.handle(&line?)? {
                Outcome::Quit => {
                    tracing::info!("Shell closed by user");
                    return Ok(());
                }
                Outcome::Continue(message) => {
                    if !message.is_empty() {
                        writeln!(output, "{}", message)?;
                    }
                }
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        writeln!(output)?;
        tracing::info!("Shell reached end of input");
        Ok(())
    }

    /// Executes one command line and returns what to show.
    pub fn handle(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (line, ""),
        };

        let message = match command.to_ascii_lowercase().as_str() {
            "" => String::new(),
            "add" => self.add(args),
            "update" => self.update(args),
            "delete" => self.delete(args),
            "find" => self.find(args)?,
            "list" => self.list()?,
            "avg" => format!(
                "Average duration: {:.*} minutes",
                self.precision,
                self.repo.average_duration()
            ),
            "load" => self.load(args),
            "help" => HELP.to_string(),
            "quit" | "exit" => return Ok(Outcome::Quit),
            other => format!("Unknown command: {}. Type 'help' for commands.", other),
        };

        Ok(Outcome::Continue(message))
    }

    fn add(&mut self, args: &str) -> String {
        match parse_movie_args(args) {
            Ok(m) => {
                if self.repo.create(
                    &m.title, &m.genre, m.year, m.rating, m.duration, m.available,
                ) {
                    "Movie added.".to_string()
                } else {
                    "Invalid data. Movie not added.".to_string()
                }
            }
            Err(e) => input_error_message("add", "Movie not added.", e),
        }
    }

    fn update(&mut self, args: &str) -> String {
        match parse_movie_args(args) {
            Ok(m) => {
                if self.repo.update(
                    &m.title, &m.genre, m.year, m.rating, m.duration, m.available,
                ) {
                    "Movie updated.".to_string()
                } else {
                    "Invalid data or movie not found. Update failed.".to_string()
                }
            }
            Err(e) => input_error_message("update", "Update failed.", e),
        }
    }

    fn delete(&mut self, title: &str) -> String {
        if title.is_empty() {
            return "Title is required.".to_string();
        }
        if self.repo.delete(title) {
            "Movie deleted.".to_string()
        } else {
            "Movie not found.".to_string()
        }
    }

    fn find(&self, title: &str) -> Result<String> {
        if title.is_empty() {
            return Ok("Title is required.".to_string());
        }
        match self.repo.find(title) {
            Some(movie) if self.json => Ok(serde_json::to_string_pretty(movie)?),
            Some(movie) => Ok(movie.to_string()),
            None => Ok("Movie not found.".to_string()),
        }
    }

    fn list(&self) -> Result<String> {
        let movies = self.repo.list_all();
        if self.json {
            return Ok(serde_json::to_string_pretty(&movies)?);
        }
        if movies.is_empty() {
            return Ok("No movies.".to_string());
        }
        Ok(movies
            .iter()
            .map(Movie::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn load(&mut self, path: &str) -> String {
        if path.is_empty() {
            return "Path is required.".to_string();
        }
        match self.repo.import_file(path) {
            Ok(count) => format!("{} movies loaded.", count),
            Err(e) => {
                tracing::warn!("Load failed: {}", e);
                e.user_friendly_message()
            }
        }
    }
}

fn input_error_message(command: &str, failure: &str, error: InputError) -> String {
    match error {
        InputError::TitleRequired => "Title is required.".to_string(),
        InputError::GenreRequired => "Genre is required.".to_string(),
        InputError::NumberFormat => format!("Invalid number format. {}", failure),
        InputError::Usage => format!(
            "Usage: {} <title>,<genre>,<year>,<rating>,<duration>,<available>",
            command
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_movie_arguments() {
        let m = parse_movie_args("Dune, Sci-Fi, 1984, 8.0, 137, TRUE").unwrap();
        assert_eq!(m.title, "Dune");
        assert_eq!(m.genre, "Sci-Fi");
        assert_eq!(m.year, 1984);
        assert_eq!(m.rating, 8.0);
        assert_eq!(m.duration, 137);
        assert!(m.available);
    }

    #[test]
    fn input_errors_map_to_messages() {
        assert_eq!(
            input_error_message("add", "Movie not added.", InputError::NumberFormat),
            "Invalid number format. Movie not added."
        );
        assert_eq!(
            input_error_message("update", "Update failed.", InputError::Usage),
            "Usage: update <title>,<genre>,<year>,<rating>,<duration>,<available>"
        );
        assert_eq!(
            input_error_message("add", "Movie not added.", InputError::GenreRequired),
            "Genre is required."
        );
    }

    #[test]
    fn reports_input_problems() {
        assert_eq!(parse_movie_args("Dune,Sci-Fi"), Err(InputError::Usage));
        assert_eq!(
            parse_movie_args(" ,Sci-Fi,1984,8.0,137,true"),
            Err(InputError::TitleRequired)
        );
        assert_eq!(
            parse_movie_args("Dune, ,1984,8.0,137,true"),
            Err(InputError::GenreRequired)
        );
        assert_eq!(
            parse_movie_args("Dune,Sci-Fi,1984,eight,137,true"),
            Err(InputError::NumberFormat)
        );
    }
}
