mod options;

use std::process::exit;

use itertools::Itertools;
pub use options::FIPServerOptions;
use rand::{rngs::StdRng, SeedableRng};

use crate::prelude::*;

/// Serves Flood-It over the FIP text protocol: one command per line on
/// stdin, responses on stdout, every exchange closed by an ok footer.
pub struct FIPServer {
    bot: GreedyBot,
    board: Option<Board>,
    config: FIPServerOptions,
}

impl FIPServer {
    /// Produces a new FIP server over the given options.
    pub fn new(options: FIPServerOptions) -> FIPServer {
        FIPServer {
            bot: GreedyBot,
            board: None,
            config: options,
        }
    }

    /// Runs Flood-It in engine mode until the input stream closes.
    pub fn run(&mut self) -> Result<()> {
        loop
        {
            let mut cmdstr: String = String::new();
            if std::io::stdin().read_line(&mut cmdstr)? == 0 {
                return Ok(());
            }

            self.handle_line(&cmdstr)?;
        }
    }

    /// Dispatches one raw input line. Blank lines carry no command and
    /// are accepted silently.
    fn handle_line(&mut self, line: &str) -> Result<()> {
        let args: Vec<&str> = line.split_whitespace().filter(|s| !s.is_empty()).collect();
        let cmd = *args.first().unwrap_or(&"");

        self.apply(cmd, args.get(1..).unwrap_or(&[]))
    }

    /// Runs a command.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "" => Ok(()),
            | "bot" => self.bot_turn(),
            | "hint" => self.hint(),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "palette" => self.palette(),
            | "play" => self.play_move(args),
            | "quit" => exit(0),
            | "redo" => self.redo_move(),
            | "show" => self.show(),
            | "status" => self.status(),
            | "undo" => self.undo_move(),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                self.err(&err)
            },
        }
    }

    /// Starts a new game, either randomized over size/colours/seed or
    /// dealt from an explicit gridstring.
    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        if args.len() % 2 != 0 {
            return Err(anyhow!("newgame options come in key-value pairs"));
        }

        let [mut size, mut colours] = [self.config.size, self.config.colours];
        let mut seed = self.config.seed;
        let mut setup: Option<GridString> = None;

        for (key, value) in args.iter().tuples() {
            match *key {
                "size"    => { size = value.parse::<usize>()?; },
                "colours" => { colours = value.parse::<usize>()?; },
                "seed"    => { seed = Some(value.parse::<u64>()?); },
                "grid"    => { setup = Some(value.parse::<GridString>()?); },
                _         => { return Err(anyhow!("unrecognized newgame option {key}")); }
            };
        }

        self.board = Some(match setup {
            Some(s) => Board::with_grid(s.grid, s.colours)?,
            None => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Board::new(size, colours, &mut rng)?
            }
        });

        println!("{}", self.get().notate());
        Ok(())
    }

    /// Floods the given colour for the human player. In vs-bot games
    /// the bot answers every applied move that leaves the game open.
    fn play_move(&mut self, args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        if args.is_empty() {
            return Err(anyhow!("no colour provided"));
        }

        let colour = args[0].parse::<Colour>()?;
        let result = self.get_mut().apply(colour);
        self.report(&result);

        if self.config.vs_bot && result.applied && !result.game_over {
            self.bot_turn()?;
        }
        Ok(())
    }

    fn bot_turn(&mut self) -> Result<()> {
        self.ensure_started()?;

        let bot = self.bot;
        let (colour, result) = bot.take_turn(self.get_mut());
        match colour {
            Some(colour) => println!("bot {}", colour.notate()),
            None => println!("bot none"),
        };
        self.report(&result);
        Ok(())
    }

    fn hint(&mut self) -> Result<()> {
        self.ensure_started()?;

        match self.bot.suggest(self.get()) {
            Some(colour) => println!("{}", colour.notate()),
            None => println!("none"),
        };
        Ok(())
    }

    fn undo_move(&mut self) -> Result<()> {
        self.ensure_started()?;

        let undone = self.get_mut().undo();
        println!("{}", undone);
        Ok(())
    }

    fn redo_move(&mut self) -> Result<()> {
        self.ensure_started()?;

        let redone = self.get_mut().redo();
        println!("{}", redone);
        Ok(())
    }

    fn status(&mut self) -> Result<()> {
        self.ensure_started()?;

        let Status { moves, flooded, game_over } = self.get().status();
        println!("moves {} flooded {} over {}", moves, flooded, game_over);
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        self.ensure_started()?;

        println!("{}", self.get().pretty());
        Ok(())
    }

    fn palette(&mut self) -> Result<()> {
        self.ensure_started()?;

        let palette = Colour::all()
            .iter()
            .take(self.get().colours())
            .map(|colour| colour.notate())
            .join("; ");
        println!("{}", palette);
        Ok(())
    }

    // accessors

    fn ensure_started(&mut self) -> Result<&mut Board> {
        if self.board.is_none() {
            Err(anyhow!("no game in progress"))
        } else {
            Ok(self.get_mut())
        }
    }

    /// Retrieves the board in a shared context.
    fn get(&self) -> &Board {
        self.board.as_ref().unwrap()
    }

    /// Retrieves the board in a mutable context.
    fn get_mut(&mut self) -> &mut Board {
        self.board.as_mut().unwrap()
    }

    // basic printers

    /// Reports a move attempt on the FIP stream.
    fn report(&self, result: &MoveResult) {
        println!("applied {} moves {} over {}", result.applied, result.moves, result.game_over);
        if result.applied && result.game_over {
            println!("game finished in {} moves", result.moves);
        }
    }

    /// Prints the server's ID.
    fn info(&self) -> Result<()>
    {
        println!(
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        Ok(())
    }

    /// Prints an error to the FIP stream.
    fn err(&self, err: &Error) -> Result<()>
    {
        println!("err\n{}", err);
        self.ok()
    }

    /// Prints the ok footer to the FIP stream.
    fn ok(&self) -> Result<()>
    {
        println!("ok");
        Ok(())
    }
}
