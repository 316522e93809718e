//! Static reference table of states and their area codes.
//!
//! The DDD lists are in display order, which is the order the state listing
//! and the city resolver walk them in.

use super::{Ddd, Uf};

/// One row of the reference table.
#[derive(Debug, Clone, Copy)]
pub struct StateEntry {
    uf: Uf,
    name: &'static str,
    area_codes: &'static [Ddd],
}

impl StateEntry {
    /// The state code.
    pub fn uf(&self) -> Uf {
        self.uf
    }

    /// The state name, e.g. "São Paulo".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The area codes serving this state, in display order.
    pub fn area_codes(&self) -> &'static [Ddd] {
        self.area_codes
    }
}

const fn entry(code: &[u8; 2], name: &'static str, area_codes: &'static [Ddd]) -> StateEntry {
    StateEntry {
        uf: Uf::from_table(*code),
        name,
        area_codes,
    }
}

macro_rules! ddds {
    ($($code:literal),+) => {
        &[$(Ddd::from_table($code)),+]
    };
}

static STATES: [StateEntry; 27] = [
    entry(b"AC", "Acre", ddds![68]),
    entry(b"AL", "Alagoas", ddds![82]),
    entry(b"AP", "Amapá", ddds![96]),
    entry(b"AM", "Amazonas", ddds![92, 97]),
    entry(b"BA", "Bahia", ddds![71, 73, 74, 75, 77]),
    entry(b"CE", "Ceará", ddds![85, 88]),
    entry(b"DF", "Distrito Federal", ddds![61]),
    entry(b"ES", "Espírito Santo", ddds![27, 28]),
    entry(b"GO", "Goiás", ddds![62, 64]),
    entry(b"MA", "Maranhão", ddds![98, 99]),
    entry(b"MT", "Mato Grosso", ddds![65, 66]),
    entry(b"MS", "Mato Grosso do Sul", ddds![67]),
    entry(b"MG", "Minas Gerais", ddds![31, 32, 33, 34, 35, 37, 38]),
    entry(b"PA", "Pará", ddds![91, 93, 94]),
    entry(b"PB", "Paraíba", ddds![83]),
    entry(b"PR", "Paraná", ddds![41, 42, 43, 44, 45, 46]),
    entry(b"PE", "Pernambuco", ddds![81, 87]),
    entry(b"PI", "Piauí", ddds![86, 89]),
    entry(b"RJ", "Rio de Janeiro", ddds![21, 22, 24]),
    entry(b"RN", "Rio Grande do Norte", ddds![84]),
    entry(b"RS", "Rio Grande do Sul", ddds![51, 53, 54, 55]),
    entry(b"RO", "Rondônia", ddds![69]),
    entry(b"RR", "Roraima", ddds![95]),
    entry(b"SC", "Santa Catarina", ddds![47, 48, 49]),
    entry(b"SP", "São Paulo", ddds![11, 12, 13, 14, 15, 16, 17, 18, 19]),
    entry(b"SE", "Sergipe", ddds![79]),
    entry(b"TO", "Tocantins", ddds![63]),
];

/// All states, in the order the selects list them.
pub fn states() -> &'static [StateEntry] {
    &STATES
}

/// Look up a state's table row.
pub fn state(uf: Uf) -> Option<&'static StateEntry> {
    STATES.iter().find(|s| s.uf == uf)
}

/// The state's name, if the code is one of the 27 units.
pub fn state_name(uf: Uf) -> Option<&'static str> {
    state(uf).map(StateEntry::name)
}

/// The state's area codes; empty for an unknown code.
pub fn area_codes(uf: Uf) -> &'static [Ddd] {
    state(uf).map(StateEntry::area_codes).unwrap_or(&[])
}
