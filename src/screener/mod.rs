//! Simulated screener data.
//!
//! Quotes are generated, not fetched: a seeded RNG walks each listed
//! stock through a plausible day so the dashboard always has content
//! and the same seed reproduces the same tape.

pub mod analysis;
pub mod table;

use std::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Egg-model cycle phase tags carried over from the screening
/// methodology the dashboard visualizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Y,
    A1,
    A2,
    A3,
    X,
    B1,
    B2,
    B3,
}

impl CyclePhase {
    const ALL: [CyclePhase; 8] = [
        CyclePhase::Y,
        CyclePhase::A1,
        CyclePhase::A2,
        CyclePhase::A3,
        CyclePhase::X,
        CyclePhase::B1,
        CyclePhase::B2,
        CyclePhase::B3,
    ];
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CyclePhase::Y => "Y",
            CyclePhase::A1 => "A1",
            CyclePhase::A2 => "A2",
            CyclePhase::A3 => "A3",
            CyclePhase::X => "X",
            CyclePhase::B1 => "B1",
            CyclePhase::B2 => "B2",
            CyclePhase::B3 => "B3",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone)]
pub struct StockQuote {
    pub code: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub ma10: f64,
    pub ma50: f64,
    pub ma132: f64,
    pub weekly_ma2: f64,
    pub weekly_ma10: f64,
    pub weekly_ma26: f64,
    pub phase: CyclePhase,
    /// Daily closes in integer cents, oldest first; the chart panes
    /// sparkline this directly.
    pub history: Vec<u64>,
}

impl StockQuote {
    /// Weekly closes derived from the daily tape (5-session buckets).
    pub fn weekly_history(&self) -> Vec<u64> {
        self.history
            .chunks(5)
            .map(|week| week.iter().sum::<u64>() / week.len() as u64)
            .collect()
    }
}

const LISTED: [(&str, &str); 20] = [
    ("2330", "TSMC"),
    ("2317", "Hon Hai"),
    ("2454", "MediaTek"),
    ("2882", "Cathay Financial"),
    ("2881", "Fubon Financial"),
    ("2412", "Chunghwa Telecom"),
    ("2303", "United Micro"),
    ("3711", "ASE Technology"),
    ("2886", "Mega Financial"),
    ("2891", "CTBC Financial"),
    ("1301", "Formosa Plastics"),
    ("2002", "China Steel"),
    ("2308", "Delta Electronics"),
    ("2357", "Asustek"),
    ("2382", "Quanta"),
    ("3008", "LARGAN"),
    ("2408", "Nanya Tech"),
    ("6505", "Formosa Petro"),
    ("2884", "E.Sun Financial"),
    ("2885", "Yuanta Financial"),
];

const HISTORY_LEN: usize = 60;

/// The two matrices the dashboard screens: today's tape and
/// yesterday's.
#[derive(Debug, Clone)]
pub struct MarketData {
    pub main: Vec<StockQuote>,
    pub previous: Vec<StockQuote>,
}

impl MarketData {
    pub fn generate(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let main = LISTED
            .iter()
            .map(|&(code, name)| generate_quote(&mut rng, code, name))
            .collect();
        let previous = LISTED
            .iter()
            .map(|&(code, name)| generate_quote(&mut rng, code, name))
            .collect();
        Self { main, previous }
    }
}

fn generate_quote(rng: &mut SmallRng, code: &'static str, name: &'static str) -> StockQuote {
    let base = rng.random_range(20.0..900.0_f64);
    let mut history = Vec::with_capacity(HISTORY_LEN);
    let mut price = base;
    for _ in 0..HISTORY_LEN {
        let drift = rng.random_range(-0.03..0.03);
        price = (price * (1.0 + drift)).max(1.0);
        history.push((price * 100.0) as u64);
    }
    let close = price;
    let prev_close = history[HISTORY_LEN - 2] as f64 / 100.0;
    let change = close - prev_close;
    let tail_mean = |days: usize| -> f64 {
        let take = days.min(history.len());
        let sum: u64 = history[history.len() - take..].iter().sum();
        sum as f64 / (take as f64 * 100.0)
    };
    let ma10 = tail_mean(10);
    let ma50 = tail_mean(50);
    let ma132 = tail_mean(HISTORY_LEN);
    StockQuote {
        code,
        name,
        price: close,
        change,
        change_percent: change / prev_close * 100.0,
        volume: rng.random_range(1_000..120_000) * 1_000,
        ma10,
        ma50,
        ma132,
        // weekly averages over the same tape at weekly horizons
        weekly_ma2: ma10,
        weekly_ma10: ma50,
        weekly_ma26: ma132,
        phase: CyclePhase::ALL[rng.random_range(0..CyclePhase::ALL.len())],
        history,
    }
}
