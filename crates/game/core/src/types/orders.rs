/// Standing orders of a Doomguard army, dispatched each night.
/// Discriminants follow the serialized table order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Orders {
    /// March on a fixed location while it stays marked interesting.
    #[strum(serialize = "Go to")]
    Goto = 0,
    /// Drift in a random passable direction.
    #[strum(serialize = "Wander")]
    Wander = 1,
    /// Hunt a named lord, retargeting Luxor (then Morkin) if he dies.
    #[strum(serialize = "Follow")]
    Follow = 2,
    /// Patrol the route graph, choosing a successor at each node.
    #[strum(serialize = "Route")]
    Route = 3,
}
