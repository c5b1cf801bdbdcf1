//! Breakpoint definitions and hit-count policy.

use crate::position::FilePosition;

/// A compiled script the engine has already reported, with its stable id.
///
/// Absence means the script is not loaded yet (or the debuggee is remote and
/// unattached); callers must keep it optional rather than defaulting the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptModule {
    pub id: u32,
}

/// When a breakpoint should actually stop execution, relative to how many
/// times it has been hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakOn {
    /// Break on every hit.
    #[default]
    Always,
    /// Break only on exactly the nth hit.
    Equal(u32),
    /// Break on the nth hit and every one after it.
    GreaterOrEqual(u32),
    /// Break on every nth hit.
    Mod(u32),
}

impl BreakOn {
    /// Whether the engine-side breakpoint should be enabled at all, given the
    /// user's enable flag and the hits seen so far.
    ///
    /// An `Equal(n)` breakpoint that has already reached its target count can
    /// never fire again, so it is sent to the engine disabled.
    #[must_use]
    pub fn engine_enabled(self, enabled: bool, hit_count: u32) -> bool {
        match self {
            BreakOn::Equal(count) if enabled && hit_count >= count => false,
            _ => enabled,
        }
    }

    /// How many hits the engine should skip before stopping, given the hits
    /// seen so far.
    #[must_use]
    pub fn engine_ignore_count(self, hit_count: u32) -> u32 {
        match self {
            BreakOn::Always => 0,
            BreakOn::Equal(count) | BreakOn::GreaterOrEqual(count) => {
                (count.max(1) - 1).saturating_sub(hit_count)
            }
            BreakOn::Mod(modulus) => {
                let modulus = modulus.max(1);
                modulus - hit_count % modulus - 1
            }
        }
    }
}

/// Everything the debugger knows about a breakpoint the user asked for.
///
/// Read-only input to command construction; commands never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointDefinition {
    pub position: FilePosition,
    pub enabled: bool,
    pub break_on: BreakOn,
    pub condition: Option<String>,
}

impl BreakpointDefinition {
    pub fn new(position: FilePosition) -> Self {
        Self {
            position,
            enabled: true,
            break_on: BreakOn::Always,
            condition: None,
        }
    }
}
