//! Resting place for [MeansOfDeath]

use strum_macros::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};


/// The causes of death a Quake 3 server reports on its `Kill` events, indexed by the numeric code
/// found right before the `:` in the event data -- `Kill: <KILLER_ID> <VICTIM_ID> <MEANS_CODE>: ...`.\
/// Codes out of the known range are reported as [MeansOfDeath::Unknown] -- see [MeansOfDeath::from_code()].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, FromRepr, IntoStaticStr)]
#[repr(u32)]
pub enum MeansOfDeath {
    #[strum(to_string = "MOD_UNKNOWN")]          Unknown        = 0,
    #[strum(to_string = "MOD_SHOTGUN")]          Shotgun        = 1,
    #[strum(to_string = "MOD_GAUNTLET")]         Gauntlet       = 2,
    #[strum(to_string = "MOD_MACHINEGUN")]       MachineGun     = 3,
    #[strum(to_string = "MOD_GRENADE")]          Grenade        = 4,
    #[strum(to_string = "MOD_GRENADE_SPLASH")]   GrenadeSplash  = 5,
    #[strum(to_string = "MOD_ROCKET")]           Rocket         = 6,
    #[strum(to_string = "MOD_ROCKET_SPLASH")]    RocketSplash   = 7,
    #[strum(to_string = "MOD_PLASMA")]           Plasma         = 8,
    #[strum(to_string = "MOD_PLASMA_SPLASH")]    PlasmaSplash   = 9,
    #[strum(to_string = "MOD_RAILGUN")]          Railgun        = 10,
    #[strum(to_string = "MOD_LIGHTNING")]        Lightning      = 11,
    #[strum(to_string = "MOD_BFG")]              Bfg            = 12,
    #[strum(to_string = "MOD_BFG_SPLASH")]       BfgSplash      = 13,
    #[strum(to_string = "MOD_WATER")]            Water          = 14,
    #[strum(to_string = "MOD_SLIME")]            Slime          = 15,
    #[strum(to_string = "MOD_LAVA")]             Lava           = 16,
    #[strum(to_string = "MOD_CRUSH")]            Crush          = 17,
    #[strum(to_string = "MOD_TELEFRAG")]         Telefrag       = 18,
    #[strum(to_string = "MOD_FALLING")]          Falling        = 19,
    #[strum(to_string = "MOD_SUICIDE")]          Suicide        = 20,
    #[strum(to_string = "MOD_TARGET_LASER")]     TargetLaser    = 21,
    #[strum(to_string = "MOD_TRIGGER_HURT")]     TriggerHurt    = 22,
    #[strum(to_string = "MOD_NAIL")]             Nail           = 23,
    #[strum(to_string = "MOD_CHAINGUN")]         Chaingun       = 24,
    #[strum(to_string = "MOD_PROXIMITY_MINE")]   ProximityMine  = 25,
    #[strum(to_string = "MOD_KAMIKAZE")]         Kamikaze       = 26,
    #[strum(to_string = "MOD_JUICED")]           Juiced         = 27,
    #[strum(to_string = "MOD_GRAPPLE")]          Grapple        = 28,
}

impl MeansOfDeath {

    /// Resolves the numeric `code` into its variant. Unknown codes are not an error:
    /// they fall back to [MeansOfDeath::Unknown]
    pub fn from_code(code: u32) -> Self {
        Self::from_repr(code)
            .unwrap_or(Self::Unknown)
    }

    /// Resolves the code as written in the log. Only the canonical decimal form is in the table:
    /// zero padded (`06`) or oversized codes fall back to [MeansOfDeath::Unknown]
    pub fn from_code_text(code_text: &str) -> Self {
        code_text.parse::<u32>().ok()
            .filter(|code| code.to_string() == code_text)
            .map_or(Self::Unknown, Self::from_code)
    }

    /// The symbolic name, as in `MOD_ROCKET_SPLASH`
    pub fn name(&self) -> &'static str {
        self.into()
    }

}

/// Shortcut for `MeansOfDeath::from_code(code).name()`
pub fn means_of_death_name(code: u32) -> &'static str {
    MeansOfDeath::from_code(code).name()
}
