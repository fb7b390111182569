//! Simulation accessor contract
//!
//! The engine never inspects simulation state directly. Display names for
//! the references a substitution can carry come through [`NameSource`],
//! a pure query interface implemented by the world model. Names come back
//! as text keys into the active context's arena; dynamically generated
//! names are expected to have been interned with
//! [`TextContext::find_or_add_key`](crate::context::TextContext::find_or_add_key).

use crate::arena::TextKey;

/// Opaque province handle belonging to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProvinceId(pub u16);

/// Opaque state-region handle belonging to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(pub u16);

/// Opaque nation handle belonging to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NationId(pub u16);

/// Display-name lookup for simulation references.
///
/// Implementations are side-effect-free queries of external state. A
/// reference with no display name returns [`TextKey::NONE`], which renders
/// as empty text.
pub trait NameSource {
    /// Display name of a province.
    fn province_name(&self, province: ProvinceId) -> TextKey;

    /// Display name of a state region.
    fn state_name(&self, state: StateId) -> TextKey;

    /// Display name of a nation.
    fn nation_name(&self, nation: NationId) -> TextKey;
}
