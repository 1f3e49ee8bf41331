//! The periodic table: a fixed, ordered catalogue of the 118 elements.
//!
//! [`Element`] is a `Copy` enum whose discriminant is the atomic number.
//! Symbols, names and standard atomic weights live in static tables indexed
//! by that number, so lookups never allocate.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Periodic table data for elements 1–118.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He = 2,
    Li = 3,
    Be = 4,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Ne = 10,
    Na = 11,
    Mg = 12,
    Al = 13,
    Si = 14,
    P = 15,
    S = 16,
    Cl = 17,
    Ar = 18,
    K = 19,
    Ca = 20,
    Sc = 21,
    Ti = 22,
    V = 23,
    Cr = 24,
    Mn = 25,
    Fe = 26,
    Co = 27,
    Ni = 28,
    Cu = 29,
    Zn = 30,
    Ga = 31,
    Ge = 32,
    As = 33,
    Se = 34,
    Br = 35,
    Kr = 36,
    Rb = 37,
    Sr = 38,
    Y = 39,
    Zr = 40,
    Nb = 41,
    Mo = 42,
    Tc = 43,
    Ru = 44,
    Rh = 45,
    Pd = 46,
    Ag = 47,
    Cd = 48,
    In = 49,
    Sn = 50,
    Sb = 51,
    Te = 52,
    I = 53,
    Xe = 54,
    Cs = 55,
    Ba = 56,
    La = 57,
    Ce = 58,
    Pr = 59,
    Nd = 60,
    Pm = 61,
    Sm = 62,
    Eu = 63,
    Gd = 64,
    Tb = 65,
    Dy = 66,
    Ho = 67,
    Er = 68,
    Tm = 69,
    Yb = 70,
    Lu = 71,
    Hf = 72,
    Ta = 73,
    W = 74,
    Re = 75,
    Os = 76,
    Ir = 77,
    Pt = 78,
    Au = 79,
    Hg = 80,
    Tl = 81,
    Pb = 82,
    Bi = 83,
    Po = 84,
    At = 85,
    Rn = 86,
    Fr = 87,
    Ra = 88,
    Ac = 89,
    Th = 90,
    Pa = 91,
    U = 92,
    Np = 93,
    Pu = 94,
    Am = 95,
    Cm = 96,
    Bk = 97,
    Cf = 98,
    Es = 99,
    Fm = 100,
    Md = 101,
    No = 102,
    Lr = 103,
    Rf = 104,
    Db = 105,
    Sg = 106,
    Bh = 107,
    Hs = 108,
    Mt = 109,
    Ds = 110,
    Rg = 111,
    Cn = 112,
    Nh = 113,
    Fl = 114,
    Mc = 115,
    Lv = 116,
    Ts = 117,
    Og = 118,
}

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        ALL.get(usize::from(n).wrapping_sub(1)).copied()
    }

    /// Exact, case-sensitive symbol lookup. `"Co"` is cobalt, `"CO"` is nothing.
    pub fn from_symbol(s: &str) -> Option<Element> {
        SYMBOLS
            .iter()
            .position(|sym| *sym == s)
            .map(|i| ALL[i])
    }

    /// Every element in atomic-number order.
    pub fn iter() -> impl Iterator<Item = Element> {
        ALL.iter().copied()
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        SYMBOLS[self as usize - 1]
    }

    pub fn name(self) -> &'static str {
        NAMES[self as usize - 1]
    }

    /// Standard atomic weight in daltons. Elements without stable isotopes
    /// carry the mass number of their longest-lived isotope.
    pub fn atomic_weight(self) -> f64 {
        ATOMIC_WEIGHTS[self as usize - 1]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SymbolVisitor;

        impl Visitor<'_> for SymbolVisitor {
            type Value = Element;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an element symbol")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Element, E> {
                Element::from_symbol(v)
                    .ok_or_else(|| E::custom(format!("unknown element symbol '{v}'")))
            }
        }

        deserializer.deserialize_str(SymbolVisitor)
    }
}

const ALL: [Element; 118] = [
    Element::H, Element::He, Element::Li, Element::Be, Element::B, Element::C, Element::N,
    Element::O, Element::F, Element::Ne, Element::Na, Element::Mg, Element::Al, Element::Si,
    Element::P, Element::S, Element::Cl, Element::Ar, Element::K, Element::Ca, Element::Sc,
    Element::Ti, Element::V, Element::Cr, Element::Mn, Element::Fe, Element::Co, Element::Ni,
    Element::Cu, Element::Zn, Element::Ga, Element::Ge, Element::As, Element::Se, Element::Br,
    Element::Kr, Element::Rb, Element::Sr, Element::Y, Element::Zr, Element::Nb, Element::Mo,
    Element::Tc, Element::Ru, Element::Rh, Element::Pd, Element::Ag, Element::Cd, Element::In,
    Element::Sn, Element::Sb, Element::Te, Element::I, Element::Xe, Element::Cs, Element::Ba,
    Element::La, Element::Ce, Element::Pr, Element::Nd, Element::Pm, Element::Sm, Element::Eu,
    Element::Gd, Element::Tb, Element::Dy, Element::Ho, Element::Er, Element::Tm, Element::Yb,
    Element::Lu, Element::Hf, Element::Ta, Element::W, Element::Re, Element::Os, Element::Ir,
    Element::Pt, Element::Au, Element::Hg, Element::Tl, Element::Pb, Element::Bi, Element::Po,
    Element::At, Element::Rn, Element::Fr, Element::Ra, Element::Ac, Element::Th, Element::Pa,
    Element::U, Element::Np, Element::Pu, Element::Am, Element::Cm, Element::Bk, Element::Cf,
    Element::Es, Element::Fm, Element::Md, Element::No, Element::Lr, Element::Rf, Element::Db,
    Element::Sg, Element::Bh, Element::Hs, Element::Mt, Element::Ds, Element::Rg, Element::Cn,
    Element::Nh, Element::Fl, Element::Mc, Element::Lv, Element::Ts, Element::Og,
];

static SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

static NAMES: [&str; 118] = [
    "Hydrogen", "Helium", "Lithium", "Beryllium", "Boron",
    "Carbon", "Nitrogen", "Oxygen", "Fluorine", "Neon",
    "Sodium", "Magnesium", "Aluminum", "Silicon", "Phosphorus",
    "Sulfur", "Chlorine", "Argon", "Potassium", "Calcium",
    "Scandium", "Titanium", "Vanadium", "Chromium", "Manganese",
    "Iron", "Cobalt", "Nickel", "Copper", "Zinc",
    "Gallium", "Germanium", "Arsenic", "Selenium", "Bromine",
    "Krypton", "Rubidium", "Strontium", "Yttrium", "Zirconium",
    "Niobium", "Molybdenum", "Technetium", "Ruthenium", "Rhodium",
    "Palladium", "Silver", "Cadmium", "Indium", "Tin",
    "Antimony", "Tellurium", "Iodine", "Xenon", "Cesium",
    "Barium", "Lanthanum", "Cerium", "Praseodymium", "Neodymium",
    "Promethium", "Samarium", "Europium", "Gadolinium", "Terbium",
    "Dysprosium", "Holmium", "Erbium", "Thulium", "Ytterbium",
    "Lutetium", "Hafnium", "Tantalum", "Tungsten", "Rhenium",
    "Osmium", "Iridium", "Platinum", "Gold", "Mercury",
    "Thallium", "Lead", "Bismuth", "Polonium", "Astatine",
    "Radon", "Francium", "Radium", "Actinium", "Thorium",
    "Protactinium", "Uranium", "Neptunium", "Plutonium", "Americium",
    "Curium", "Berkelium", "Californium", "Einsteinium", "Fermium",
    "Mendelevium", "Nobelium", "Lawrencium", "Rutherfordium", "Dubnium",
    "Seaborgium", "Bohrium", "Hassium", "Meitnerium", "Darmstadtium",
    "Roentgenium", "Copernicium", "Nihonium", "Flerovium", "Moscovium",
    "Livermorium", "Tennessine", "Oganesson",
];

// Conventional rounded weights; radioactive elements use the longest-lived isotope.
static ATOMIC_WEIGHTS: [f64; 118] = [
    1.008,    // H
    4.0026,   // He
    6.94,     // Li
    9.0122,   // Be
    10.81,    // B
    12.011,   // C
    14.007,   // N
    15.999,   // O
    18.998,   // F
    20.180,   // Ne
    22.990,   // Na
    24.305,   // Mg
    26.982,   // Al
    28.085,   // Si
    30.974,   // P
    32.06,    // S
    35.45,    // Cl
    39.948,   // Ar
    39.098,   // K
    40.078,   // Ca
    44.956,   // Sc
    47.867,   // Ti
    50.942,   // V
    51.996,   // Cr
    54.938,   // Mn
    55.845,   // Fe
    58.933,   // Co
    58.693,   // Ni
    63.546,   // Cu
    65.38,    // Zn
    69.723,   // Ga
    72.63,    // Ge
    74.922,   // As
    78.971,   // Se
    79.904,   // Br
    83.798,   // Kr
    85.468,   // Rb
    87.62,    // Sr
    88.906,   // Y
    91.224,   // Zr
    92.906,   // Nb
    95.95,    // Mo
    98.0,     // Tc
    101.07,   // Ru
    102.91,   // Rh
    106.42,   // Pd
    107.87,   // Ag
    112.41,   // Cd
    114.82,   // In
    118.71,   // Sn
    121.76,   // Sb
    127.60,   // Te
    126.90,   // I
    131.29,   // Xe
    132.91,   // Cs
    137.33,   // Ba
    138.91,   // La
    140.12,   // Ce
    140.91,   // Pr
    144.24,   // Nd
    145.0,    // Pm
    150.36,   // Sm
    151.96,   // Eu
    157.25,   // Gd
    158.93,   // Tb
    162.50,   // Dy
    164.93,   // Ho
    167.26,   // Er
    168.93,   // Tm
    173.04,   // Yb
    174.97,   // Lu
    178.49,   // Hf
    180.95,   // Ta
    183.84,   // W
    186.21,   // Re
    190.23,   // Os
    192.22,   // Ir
    195.08,   // Pt
    196.97,   // Au
    200.59,   // Hg
    204.38,   // Tl
    207.2,    // Pb
    208.98,   // Bi
    209.0,    // Po
    210.0,    // At
    222.0,    // Rn
    223.0,    // Fr
    226.0,    // Ra
    227.0,    // Ac
    232.04,   // Th
    231.04,   // Pa
    238.03,   // U
    237.0,    // Np
    244.0,    // Pu
    243.0,    // Am
    247.0,    // Cm
    247.0,    // Bk
    251.0,    // Cf
    252.0,    // Es
    257.0,    // Fm
    258.0,    // Md
    259.0,    // No
    262.0,    // Lr
    267.0,    // Rf
    270.0,    // Db
    271.0,    // Sg
    270.0,    // Bh
    277.0,    // Hs
    278.0,    // Mt
    281.0,    // Ds
    282.0,    // Rg
    285.0,    // Cn
    286.0,    // Nh
    289.0,    // Fl
    290.0,    // Mc
    293.0,    // Lv
    294.0,    // Ts
    294.0,    // Og
];
