/// Engine-wide settings, fixed when an [`Engine`][crate::Engine] is constructed. Nothing here can
/// vary between calls.
#[derive(Debug, Clone, clap::Args)]
pub struct Config {
    /// Width and height of the square canvas, in pixels.
    #[clap(long, default_value_t = Config::DEFAULT_SIZE)]
    pub size: u32,

    /// Antialias strokes and fills. Off by default, so every drawn pixel is an exact palette
    /// color.
    #[clap(long)]
    pub antialias: bool,
}

impl Config {
    pub const DEFAULT_SIZE: u32 = 800;
    pub const MIN_SIZE: u32 = 16;
    pub const MAX_SIZE: u32 = 8192;
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: Config::DEFAULT_SIZE,
            antialias: false,
        }
    }
}
