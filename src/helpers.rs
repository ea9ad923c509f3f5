use crate::types::{DEFAULT_DELAY, MAX_DELAY, MIN_DELAY};

use std::{env, fs, process};

pub struct Args {
    pub dict_path: Option<String>,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub delay: u16,
}

pub fn print_usage_and_exit() -> ! {
    eprintln!(
        "Usage: fingerspell [-dict PATH] [-min N] [-max N] [-delay N]

Options:
  -dict PATH   Use word list at PATH (one word per line)
  -min N       Only pick words spelling out to at least N signs
  -max N       Only pick words spelling out to at most N signs
  -delay N     Ticks each sign stays on screen ({MIN_DELAY}-{MAX_DELAY}, default {DEFAULT_DELAY})
By default, a built-in German word list is used. Non-numeric length
bounds fall back to the range the word list offers.
Set RUST_LOG=debug and redirect stderr to a file to capture logs."
    );

    process::exit(1);
}

pub fn parse_args() -> Args {
    let mut parsed = Args {
        dict_path: None,
        min_len: None,
        max_len: None,
        delay: DEFAULT_DELAY,
    };

    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => print_usage_and_exit(),

            "-d" | "-dict" | "--dict" => {
                let path = args.next().unwrap_or_else(|| {
                    eprintln!("Missing path after {}", arg);

                    print_usage_and_exit()
                });

                parsed.dict_path = Some(path);
            }

            "-min" | "--min" => {
                let value = args.next().unwrap_or_else(|| {
                    eprintln!("Missing length after {}", arg);

                    print_usage_and_exit()
                });

                parsed.min_len = value.parse::<usize>().ok();
            }

            "-max" | "--max" => {
                let value = args.next().unwrap_or_else(|| {
                    eprintln!("Missing length after {}", arg);

                    print_usage_and_exit()
                });

                parsed.max_len = value.parse::<usize>().ok();
            }

            "-delay" | "--delay" => {
                let value = args.next().unwrap_or_else(|| {
                    eprintln!("Missing tick count after {}", arg);

                    print_usage_and_exit()
                });

                parsed.delay = value
                    .parse::<u16>()
                    .map(|d| d.clamp(MIN_DELAY, MAX_DELAY))
                    .unwrap_or(DEFAULT_DELAY);
            }

            other => {
                eprintln!("Unknown argument: {}", other);

                print_usage_and_exit()
            }
        }
    }

    parsed
}

pub fn load_word_list_from_file(path: &str) -> Vec<String> {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read word list at {}: {}", path, e);

        process::exit(1);
    });

    collect_words(&content)
}

pub fn builtin_word_list() -> Vec<String> {
    collect_words(include_str!("../assets/words.txt"))
}

// casing is kept; the picker lowercases and the original form is shown
// with a wrong answer
fn collect_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_is_not_empty() {
        assert!(builtin_word_list().len() > 100);
    }

    #[test]
    fn word_lists_are_trimmed_and_hold_no_blank_lines() {
        let words = collect_words("  Hund \n\n grün\n\t\n");
        assert_eq!(words, vec!["Hund".to_string(), "grün".to_string()]);
    }
}
