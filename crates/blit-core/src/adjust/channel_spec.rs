//! Per-channel argument defaulting.
//!
//! Every entry point takes either one value shared by red, green and blue or
//! one value per channel. The choice is made once, at the call site.

/// One argument for all colour channels, or one per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelSpec<T> {
    Uniform(T),
    PerChannel(T, T, T),
}

impl<T> ChannelSpec<T> {
    /// Build from optional green/blue arguments.
    ///
    /// Unless both green and blue are given, `red` applies to all three
    /// channels; a green value without a blue one is dropped.
    pub fn from_args(red: T, green: Option<T>, blue: Option<T>) -> Self {
        match (green, blue) {
            (Some(green), Some(blue)) => Self::PerChannel(red, green, blue),
            _ => Self::Uniform(red),
        }
    }

    /// Convert every held value with `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ChannelSpec<U> {
        match self {
            Self::Uniform(v) => ChannelSpec::Uniform(f(v)),
            Self::PerChannel(r, g, b) => ChannelSpec::PerChannel(f(r), f(g), f(b)),
        }
    }

    /// Like [`ChannelSpec::map`] for fallible conversions; stops at the first error.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<ChannelSpec<U>, E> {
        Ok(match self {
            Self::Uniform(v) => ChannelSpec::Uniform(f(v)?),
            Self::PerChannel(r, g, b) => ChannelSpec::PerChannel(f(r)?, f(g)?, f(b)?),
        })
    }
}

impl<T: Clone> ChannelSpec<T> {
    /// `[red, green, blue]`, replicating a uniform value.
    pub fn resolve(self) -> [T; 3] {
        match self {
            Self::Uniform(v) => [v.clone(), v.clone(), v],
            Self::PerChannel(r, g, b) => [r, g, b],
        }
    }
}

impl<T> From<T> for ChannelSpec<T> {
    fn from(value: T) -> Self {
        Self::Uniform(value)
    }
}
