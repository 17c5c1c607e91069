use dotship::{
    decode_position, encode_position, init_logging, Direction, FrameInput, LedCursor, LedGrid,
    PlacementEvent, PlacementSession, Scanner, TextDisplay, FLEET, GRID_COLS, GRID_ROWS,
};

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use log::{debug, info};

type Session = PlacementSession<u8, GRID_COLS, GRID_ROWS>;
type Fleet = dotship::Fleet<u8, GRID_COLS, GRID_ROWS>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place the fleet by replaying button pushes, one per frame.
    Place {
        #[arg(
            long,
            default_value = "",
            help = "Pushes: n/s/e/w move, r rotate, c confirm, . idle (e.g. --moves ersc)"
        )]
        moves: String,
    },
    /// Pack a zero-based (row, col) into a turn-exchange byte.
    Encode {
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
    },
    /// Unpack a turn-exchange byte into a zero-based (row, col).
    Decode {
        #[arg(value_parser = parse_byte, help = "Byte as printed by encode (0x11) or decimal (17)")]
        byte: u8,
    },
}

fn parse_byte(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("{:?} is not a byte: {}", s, e))
}

fn parse_script(script: &str) -> anyhow::Result<Vec<FrameInput>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'n' => Ok(FrameInput::moving(Direction::North)),
            's' => Ok(FrameInput::moving(Direction::South)),
            'e' => Ok(FrameInput::moving(Direction::East)),
            'w' => Ok(FrameInput::moving(Direction::West)),
            'r' => Ok(FrameInput::rotating()),
            'c' => Ok(FrameInput::confirming()),
            '.' => Ok(FrameInput::default()),
            other => Err(anyhow!("unknown push {:?} in move script", other)),
        })
        .collect()
}

fn show(layers: &[&LedGrid]) {
    let mut display = TextDisplay::<u8, GRID_COLS, GRID_ROWS>::new();
    Scanner::<GRID_COLS>::new().full_frame(layers, &mut display);
    println!("{}", display);
}

fn place(moves: &str) -> anyhow::Result<()> {
    let frames = parse_script(moves)?;
    let mut fleet = Fleet::new();
    let mut ships = FLEET.iter();
    let mut session: Option<Session> = match ships.next() {
        Some(ship) => Some(Session::new(*ship, LedCursor::home()).map_err(|e| anyhow!(e))?),
        None => None,
    };

    for (frame, input) in frames.iter().enumerate() {
        let Some(current) = session.as_mut() else {
            info!("fleet complete, ignoring remaining pushes");
            break;
        };
        let event = current.handle(input, &mut fleet);
        debug!("frame {}: {:?}", frame, event);
        match event {
            PlacementEvent::Committed => {
                info!("{} placed", current.ship().name());
                session = match ships.next() {
                    Some(ship) => {
                        Some(Session::new(*ship, LedCursor::home()).map_err(|e| anyhow!(e))?)
                    }
                    None => None,
                };
            }
            PlacementEvent::Collision => println!("frame {}: ships may not overlap", frame),
            PlacementEvent::RotateRejected => println!("frame {}: cannot rotate here", frame),
            _ => {}
        }
    }

    println!("Committed ships ({}):", fleet.ships_committed());
    show(&[fleet.grid()]);
    if let Some(current) = session {
        println!(
            "\nStill placing {} ({:?}):",
            current.ship().name(),
            current.orientation()
        );
        show(&[fleet.grid(), current.grid()]);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Place { moves } => place(&moves)?,
        Commands::Encode { row, col } => {
            let byte = encode_position::<GRID_COLS, GRID_ROWS>(row, col).map_err(|e| anyhow!(e))?;
            println!("0x{:02x}", byte);
        }
        Commands::Decode { byte } => {
            let (row, col) = decode_position::<GRID_COLS, GRID_ROWS>(byte).map_err(|e| anyhow!(e))?;
            println!("row={} col={}", row, col);
        }
    }
    Ok(())
}
