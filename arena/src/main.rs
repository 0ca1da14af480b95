use std::io;

use arena::{play_game, play_series, CpuPlayer, GameResult, HumanPlayer, Player, RandomPlayer};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use zerosum::{BoxStyle, OthelloState, Playable, Side, TicTacToeState};

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    game: Game,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info", global = true)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Game {
    /// Play Othello on an 8x8 board
    Othello(Options),
    /// Play Tic-Tac-Toe on a 3x3 board
    Tictactoe(Options),
}

#[derive(clap::Args)]
struct Options {
    /// CPU level: the search depth in plies, at least 1
    #[arg(short = 'L', long)]
    level: Option<u32>,

    /// Two CPUs play with each other
    #[arg(short = 'a', long, default_value_t = false)]
    demo: bool,

    /// Log every move the CPU considers
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Draw the board with box-drawing characters
    #[arg(short = 'U', long, default_value_t = false)]
    unicode: bool,

    /// The side to play as, asked for if not given
    #[arg(long, value_enum)]
    play_as: Option<SideArg>,

    /// Let the CPU play a series of games against a random player
    #[arg(long, default_value_t = false)]
    against_random: bool,

    /// How many games to play against the random player
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed for the random player
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    O,
    X,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::O => Side::O,
            SideArg::X => Side::X,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    match args.game {
        Game::Othello(options) => run(OthelloState::new(), 5, options),
        Game::Tictactoe(options) => run(TicTacToeState::new(), 9, options),
    }
}

fn run<S: Playable>(start: S, default_level: u32, options: Options) -> anyhow::Result<()> {
    let level = options.level.unwrap_or(default_level).max(1);
    let style = if options.unicode {
        BoxStyle::Unicode
    } else {
        BoxStyle::Ascii
    };

    if options.against_random {
        // Get a random seed
        let seed = options.seed.unwrap_or_else(rand::random);
        info!(seed);
        let mut cpu = CpuPlayer::new("CPU", level, options.verbose);
        let mut random = RandomPlayer::new("Random", StdRng::seed_from_u64(seed));
        let score = play_series(&mut cpu, &mut random, &start, options.num_games)?;
        eprintln!(
            "End result:\n- {} wins by {}\n- {} wins by {}\n- {} ties",
            score.wins[0], cpu.name, score.wins[1], random.name, score.ties
        );
        return Ok(());
    }

    let mut stdout = io::stdout();
    if options.demo {
        let mut cpu_1 = CpuPlayer::new("CPU 1", level, options.verbose);
        let mut cpu_2 = CpuPlayer::new("CPU 2", level, options.verbose);
        let players: [&mut dyn Player<S>; 2] = [&mut cpu_1, &mut cpu_2];
        let (result, _) = play_game(players, start, &mut stdout, Some(style))?;
        print_result(result, [&cpu_1.name, &cpu_2.name]);
        return Ok(());
    }

    let mut human = HumanPlayer::new("You", io::stdin().lock(), io::stdout());
    let side = match options.play_as {
        Some(side) => Side::from(side),
        None => human.ask_side()?,
    };
    let mut cpu = CpuPlayer::new("CPU", level, options.verbose);
    let names = match side {
        Side::O => [human.name.clone(), cpu.name.clone()],
        Side::X => [cpu.name.clone(), human.name.clone()],
    };
    let players: [&mut dyn Player<S>; 2] = match side {
        Side::O => [&mut human, &mut cpu],
        Side::X => [&mut cpu, &mut human],
    };
    let (result, _) = play_game(players, start, &mut stdout, Some(style))?;
    print_result(result, [&names[0], &names[1]]);
    Ok(())
}

fn print_result(result: GameResult, names: [&str; 2]) {
    match result {
        GameResult::WonByPlayer { player_idx } => println!("Game over.  {} won", names[player_idx]),
        GameResult::Tie => println!("Game over.  It was a draw"),
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}
