//! Configuration errors
//!
//! Misconfiguration is rejected once, when a config is validated or a level is
//! built, never in the middle of a tick.

/// Why a configuration or level could not be constructed
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Screen width/height must be positive
    InvalidScreen { width: f32, height: f32 },
    /// Cell size must be positive
    InvalidCellSize(f32),
    /// Damping must lie strictly between 0 and 1
    InvalidDamping(f32),
    /// Launch scale must be positive
    InvalidLaunchScale(f32),
    /// Golden chance denominator of zero
    ZeroGoldenChance,
    /// Level timer must be positive
    InvalidTimeBudget(f32),
    /// Tick rate must be positive
    InvalidTickRate(f32),
    /// Collision radius fraction must lie in (0, 1]
    InvalidCollisionFraction(f32),
    /// Rest speed must not be negative
    InvalidRestSpeed(f32),
    /// No level parameters configured
    NoLevels,
    /// Grid size of zero
    EmptyGrid,
    /// Obstacles plus the target would not fit on the grid
    TooManyObstacles { count: u32, cells: u32 },
    /// Grid extends past the screen
    GridOffScreen { grid_size: u32, cell_size: f32 },
    /// Target or obstacle off the grid, or two of them sharing a cell
    OverlappingCells,
    /// No free screen position left for the projectile
    NoSpawnSpace,
    /// Malformed config file
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScreen { width, height } => {
                write!(f, "Screen size must be positive, got {}x{}", width, height)
            }
            Self::InvalidCellSize(size) => write!(f, "Cell size must be positive, got {}", size),
            Self::InvalidDamping(d) => write!(f, "Damping must be in (0, 1), got {}", d),
            Self::InvalidLaunchScale(s) => write!(f, "Launch scale must be positive, got {}", s),
            Self::ZeroGoldenChance => write!(f, "Golden chance denominator must be at least 1"),
            Self::InvalidTimeBudget(t) => write!(f, "Level time budget must be positive, got {}", t),
            Self::InvalidTickRate(hz) => write!(f, "Tick rate must be positive, got {}", hz),
            Self::InvalidCollisionFraction(r) => {
                write!(f, "Collision radius fraction must be in (0, 1], got {}", r)
            }
            Self::InvalidRestSpeed(s) => write!(f, "Rest speed must not be negative, got {}", s),
            Self::NoLevels => write!(f, "At least one level must be configured"),
            Self::EmptyGrid => write!(f, "Grid size must be at least 1"),
            Self::TooManyObstacles { count, cells } => write!(
                f,
                "{} obstacles do not fit on a {}-cell grid next to the target",
                count, cells
            ),
            Self::GridOffScreen {
                grid_size,
                cell_size,
            } => write!(
                f,
                "A {}x{} grid of {}px cells does not fit on screen",
                grid_size, grid_size, cell_size
            ),
            Self::OverlappingCells => {
                write!(f, "Level cells must be on the grid and must not overlap")
            }
            Self::NoSpawnSpace => write!(f, "No free screen position to spawn the projectile"),
            Self::Parse(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
