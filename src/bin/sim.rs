use anyhow::anyhow;
use clap::Parser;
use dotship::{
    decode_position, encode_position, init_logging, LedCursor, ShotBoard, ShotOutcome, FLEET,
    GRID_COLS, GRID_ROWS, TOTAL_SHIP_CELLS,
};
use log::{debug, info};
use rand::{rngs::SmallRng, Rng, SeedableRng};

type Fleet = dotship::Fleet<u8, GRID_COLS, GRID_ROWS>;
type Shots = ShotBoard<u8, GRID_COLS, GRID_ROWS>;

/// Play two random players against each other in one process.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    seed1: u64,
    seed2: u64,
}

struct Side {
    rng: SmallRng,
    fleet: Fleet,
    shots: Shots,
    fired: usize,
}

impl Side {
    fn new(seed: u64) -> anyhow::Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut fleet = Fleet::new();
        for ship in FLEET {
            let session = fleet
                .random_session(&mut rng, ship)
                .map_err(|e| anyhow!(e))?;
            if !session.confirm(&mut fleet) {
                return Err(anyhow!("{} collided after random placement", ship.name()));
            }
        }
        Ok(Self {
            rng,
            fleet,
            shots: Shots::new(),
            fired: 0,
        })
    }

    /// Picks an unfired cell and returns it as a position byte.
    fn aim(&mut self) -> anyhow::Result<(LedCursor, u8)> {
        loop {
            let col = self.rng.random_range(0..GRID_COLS);
            let row = self.rng.random_range(0..GRID_ROWS);
            let cursor = LedCursor::new(col as isize, row as isize);
            if !self.shots.already_fired(&cursor) {
                let byte = encode_position::<GRID_COLS, GRID_ROWS>(row, col)
                    .map_err(|e| anyhow!(e))?;
                return Ok((cursor, byte));
            }
        }
    }

    /// Resolves a position byte against our fleet and returns the reply byte.
    fn answer(&mut self, byte: u8) -> anyhow::Result<u8> {
        let (row, col) = decode_position::<GRID_COLS, GRID_ROWS>(byte).map_err(|e| anyhow!(e))?;
        let outcome = self
            .fleet
            .receive_shot(row, col)
            .map_err(|e| anyhow!(e))?;
        Ok(outcome.to_byte())
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let mut sides = [Side::new(args.seed1)?, Side::new(args.seed2)?];
    info!("player 1 fleet:\n{}", sides[0].fleet.grid());
    info!("player 2 fleet:\n{}", sides[1].fleet.grid());

    let mut turn = 0;
    let winner = loop {
        let (shooter, defender) = if turn == 0 {
            let (a, b) = sides.split_at_mut(1);
            (&mut a[0], &mut b[0])
        } else {
            let (a, b) = sides.split_at_mut(1);
            (&mut b[0], &mut a[0])
        };
        let (cursor, sent) = shooter.aim()?;
        let reply = defender.answer(sent)?;
        let outcome = ShotOutcome::from_byte(reply)
            .ok_or_else(|| anyhow!("unexpected reply byte {:#04x}", reply))?;
        shooter.shots.record(&cursor, outcome);
        shooter.fired += 1;
        debug!("player {} fired 0x{:02x}: {:?}", turn + 1, sent, outcome);
        if shooter.shots.hit_count() >= TOTAL_SHIP_CELLS || defender.fleet.is_destroyed() {
            break turn + 1;
        }
        turn = 1 - turn;
    };

    println!(
        "winner=player{} shots1={} shots2={}",
        winner, sides[0].fired, sides[1].fired
    );
    Ok(())
}
