// =============================================================================
// FINITE — La petite catégorie Void, (), Bool
// =============================================================================
//
// Les types sont des ensembles, les fonctions des flèches entre ensembles.
// Trois types minuscules suffisent pour voir apparaître une catégorie :
//
//   Void : l'ensemble vide      (0 valeur)   → on peut en DÉFINIR des
//                                              fonctions, jamais les appeler
//   ()   : le singleton         (1 valeur)   → `unit` oublie son argument
//   Bool : deux valeurs                       → les prédicats
//
// Combien de flèches entre deux ensembles finis A et B ? |B| ^ |A|.
// D'où les cas limites :
//   - Void → X  : exactement une flèche (absurd), car x^0 = 1
//   - X → Void  : aucune si X est habité, car 0^n = 0
//
// Au total, 11 flèches :
//   Void → Void, Void → (), Void → Bool   : absurd (×3)
//   () → ()                               : id
//   () → Bool                             : true, false
//   Bool → ()                             : unit
//   Bool → Bool                           : id, not, true, false
//
// =============================================================================

use std::fmt;

/// Le type sans valeur. On ne peut pas en construire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Void {}

/// De Void on peut tout déduire : la fonction existe, mais ne sera
/// jamais appelée.
pub fn absurd<T>(v: Void) -> T {
    match v {}
}

/// Oublie son argument. Paramétriquement polymorphe.
pub fn unit<T>(_: T) {}

pub fn negate(b: bool) -> bool {
    !b
}

pub fn always_true(_: bool) -> bool {
    true
}

pub fn always_false(_: bool) -> bool {
    false
}

/// Les quatre fonctions Bool → Bool, et il n'y en a pas d'autre (2^2 = 4).
pub const BOOL_ENDOMORPHISMS: [(&str, fn(bool) -> bool); 4] = [
    ("id", super::compose::identity::<bool>),
    ("not", negate),
    ("true", always_true),
    ("false", always_false),
];

/// Un objet de la petite catégorie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiniteObject {
    Void,
    Unit,
    Bool,
}

impl FiniteObject {
    pub const ALL: [FiniteObject; 3] = [FiniteObject::Void, FiniteObject::Unit, FiniteObject::Bool];

    /// Nombre d'éléments de l'ensemble
    pub fn cardinality(self) -> usize {
        match self {
            FiniteObject::Void => 0,
            FiniteObject::Unit => 1,
            FiniteObject::Bool => 2,
        }
    }

    /// Nom de chaque élément, dans l'ordre des index
    fn element_names(self) -> &'static [&'static str] {
        match self {
            FiniteObject::Void => &[],
            FiniteObject::Unit => &["()"],
            FiniteObject::Bool => &["false", "true"],
        }
    }
}

impl fmt::Display for FiniteObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FiniteObject::Void => "Void",
            FiniteObject::Unit => "()",
            FiniteObject::Bool => "Bool",
        };
        f.pad(name)
    }
}

/// Une flèche entre deux objets finis, donnée par sa table :
/// `table[i]` est l'index de l'image du i-ème élément de la source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrow {
    pub name: String,
    pub source: FiniteObject,
    pub target: FiniteObject,
    pub table: Vec<usize>,
}

impl Arrow {
    /// Applique la flèche à l'élément d'index `i` de la source
    pub fn apply(&self, i: usize) -> Option<usize> {
        self.table.get(i).copied()
    }
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} -> {}", self.name, self.source, self.target)
    }
}

/// |Hom(a, b)| = |b| ^ |a|
pub fn hom_count(a: FiniteObject, b: FiniteObject) -> usize {
    b.cardinality().pow(a.cardinality() as u32)
}

/// Donne un nom lisible à une table de fonction
fn arrow_name(source: FiniteObject, target: FiniteObject, table: &[usize]) -> String {
    match (source, target) {
        (FiniteObject::Void, _) => "absurd".to_string(),
        (_, FiniteObject::Unit) if source == target => "id".to_string(),
        (_, FiniteObject::Unit) => "unit".to_string(),
        (FiniteObject::Bool, FiniteObject::Bool) => match table {
            [0, 1] => "id".to_string(),
            [1, 0] => "not".to_string(),
            [1, 1] => "true".to_string(),
            _ => "false".to_string(),
        },
        _ => {
            // Constante : toute la source envoyée sur un seul élément
            let names = target.element_names();
            table.first().map_or_else(String::new, |&i| names[i].to_string())
        }
    }
}

/// Énumère toutes les flèches de `a` vers `b`.
///
/// Chaque table est un nombre écrit en base |b| avec |a| chiffres.
pub fn enumerate_arrows(a: FiniteObject, b: FiniteObject) -> Vec<Arrow> {
    let n = a.cardinality();
    let base = b.cardinality();

    (0..hom_count(a, b))
        .map(|code| {
            let mut rest = code;
            let table: Vec<usize> = (0..n)
                .map(|_| {
                    let digit = rest % base;
                    rest /= base;
                    digit
                })
                .collect();
            Arrow {
                name: arrow_name(a, b, &table),
                source: a,
                target: b,
                table,
            }
        })
        .collect()
}

/// Toutes les flèches de la catégorie {Void, (), Bool}
pub fn all_arrows() -> Vec<Arrow> {
    FiniteObject::ALL
        .iter()
        .flat_map(|&a| FiniteObject::ALL.iter().flat_map(move |&b| enumerate_arrows(a, b)))
        .collect()
}
