use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::error::Error;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;
use synonym_core::core::types::{language_code, language_label};
use synonym_core::persistence::load_corpus;
use synonym_core::{GameConfig, GameError, Pos, Session, SharedProvider, WordPool};

#[derive(Parser, Debug)]
#[command(name = "synonym_game", about = "Guess the word the clues have in common")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    words: Option<PathBuf>,

    #[arg(long)]
    synsets: Option<PathBuf>,

    /// Starting language, code or name ("eng", "Spanish")
    #[arg(long)]
    lang: Option<String>,

    /// Starting part of speech, code or name ("n", "Verb")
    #[arg(long)]
    pos: Option<Pos>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut config = GameConfig::load_or_default(args.config.as_deref())?;
    if let Some(words) = args.words {
        config.words_path = words;
    }
    if let Some(synsets) = args.synsets {
        config.synsets_path = synsets;
    }
    if let Some(lang) = &args.lang {
        config.default_lang = language_code(lang);
    }
    if let Some(pos) = args.pos {
        config.default_pos = pos;
    }

    let pool = Arc::new(WordPool::load(&config.words_path)?);
    let provider: SharedProvider = Arc::new(load_corpus(&config.synsets_path)?);
    let mut session = Session::from_config(pool.clone(), provider, &config);

    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    print_welcome();

    loop {
        print_menu(&session);
        let Some(choice) = prompt()? else { break };
        match choice.to_lowercase().as_str() {
            "guess" | "g" => play_round(&mut session)?,
            "part of speech" | "p" => {
                println!("Pick a part of speech: Noun, Verb, Adjective, Adverb");
                let Some(answer) = prompt()? else { break };
                match answer.parse::<Pos>() {
                    Ok(pos) => {
                        session.set_pos(pos);
                        println!("You changed your part of speech to: {}.", pos.label().to_lowercase());
                    }
                    Err(_) => println!("You should pick one of the options."),
                }
            }
            "language" | "l" => {
                let offered: Vec<&str> = pool
                    .languages()
                    .filter(|lang| pool.has_language(lang))
                    .map(language_label)
                    .collect();
                println!("Pick a language: {}", offered.join(", "));
                let Some(answer) = prompt()? else { break };
                let code = language_code(&answer);
                if pool.has_language(&code) {
                    session.set_lang(&code);
                    println!("You changed your language to: {}.", language_label(&code));
                } else {
                    println!("You should pick one of the options.");
                }
            }
            "done" | "d" | "exit" => break,
            _ => println!("Please pick one of the proposed options."),
        }
    }

    println!("\nBye, hope you enjoyed the game.");
    Ok(())
}

fn play_round(session: &mut Session) -> Result<(), Box<dyn Error>> {
    let clues = match session.next_round() {
        Ok((_, clues)) => clues,
        Err(e @ (GameError::EmptyBucket { .. } | GameError::NoPlayableWord { .. } | GameError::Lookup(_))) => {
            log::error!("Could not start a round: {}", e);
            println!("{}", "Something went wrong, please try again later.".red());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("\nThe words below have a synonym in common. Can you figure it out?\n");
    for clue in &clues {
        println!("  {}", clue.as_str().bold());
    }

    loop {
        println!("\nPlease type your guess below");
        let Some(guess) = prompt()? else { return Ok(()) };
        println!("You said: {}.", guess.as_str().bold());

        if session.check_guess(&guess)? {
            println!("{}", "CONGRATULATIONS! THIS IS THE CORRECT ANSWER.".green().bold());
            return Ok(());
        }
        println!("Unfortunately, this answer is not correct.");
        println!("Type 't' to try again or 'g' to give up.");

        match prompt()?.as_deref().map(str::to_lowercase).as_deref() {
            Some("t") | Some("try") | Some("i will try again") => continue,
            _ => {
                println!("The correct answer was: {}.", session.reveal()?.to_uppercase().bold());
                return Ok(());
            }
        }
    }
}

fn print_welcome() {
    println!("{}\n", "WELCOME TO THE SYNONYM GAME!".bold());
    println!("In this game, you will be shown a list of words. These words may or may not be");
    println!("synonyms, but they definitely have a synonym in common.");
    println!("Your goal will be to guess this common synonym.\n");
    println!(
        "For example, {} and {} are not synonyms but they both are synonymous with {}.",
        "knot".bold(),
        "arc".bold(),
        "bow".bold()
    );
    println!("So here {} would be the correct answer.\n", "bow".bold());
}

fn print_menu(session: &Session) {
    println!("\nWhat would you like to do now?\n");
    println!("  {}: guess a word", "Guess".bold());
    println!(
        "  {}: pick a part of speech (current: {})",
        "Part of speech".bold(),
        session.pos().label()
    );
    println!(
        "  {}: pick a language (current: {})",
        "Language".bold(),
        language_label(session.lang())
    );
    println!("  {}: end the game", "Done".bold());
}

/// Reads one trimmed line. `None` on end of input.
fn prompt() -> std::io::Result<Option<String>> {
    print!("> ");
    stdout().flush()?;
    let mut input = String::new();
    if stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
