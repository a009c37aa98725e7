//! Person and company generators.

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Adrian", "Alice", "Amelia", "Andre", "Beatrice", "Bruno", "Camille", "Carlos",
    "Chloe", "Daniel", "Diana", "Elena", "Elias", "Emma", "Felix", "Fiona", "Gabriel", "Grace",
    "Hannah", "Hugo", "Isabel", "Ivan", "Jack", "Julia", "Kai", "Laura", "Leon", "Lucas", "Maya",
    "Mila", "Nadia", "Noah", "Olivia", "Oscar", "Paula", "Quentin", "Rosa", "Samuel", "Sofia",
    "Theo", "Uma", "Victor", "Wendy", "Xavier", "Yara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Baker", "Becker", "Brown", "Carter", "Chen", "Clark", "Davis", "Dubois", "Evans",
    "Fischer", "Garcia", "Gomez", "Hall", "Hansen", "Ito", "Jensen", "Johnson", "Kim", "Kowalski",
    "Lambert", "Lee", "Lopez", "Martin", "Meyer", "Miller", "Moreau", "Nguyen", "Novak", "Olsen",
    "Patel", "Perez", "Quinn", "Rossi", "Schmidt", "Silva", "Smith", "Tanaka", "Taylor", "Walker",
    "Weber", "Williams", "Wilson", "Young", "Zimmerman",
];

const TITLES: &[&str] = &["Mr.", "Mrs.", "Ms.", "Miss", "Dr.", "Prof."];

const JOB_TITLES: &[&str] = &[
    "Accountant", "Architect", "Biologist", "Carpenter", "Chef", "Data Analyst", "Designer",
    "Electrician", "Engineer", "Firefighter", "Geologist", "Journalist", "Lawyer", "Librarian",
    "Mechanic", "Nurse", "Pharmacist", "Photographer", "Pilot", "Product Manager", "Professor",
    "Software Developer", "Surgeon", "Teacher", "Translator", "Veterinarian",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Ltd", "Group", "and Sons", "PLC", "Corp"];

const CATCH_PHRASE_ADJECTIVES: &[&str] = &[
    "Adaptive", "Automated", "Balanced", "Centralized", "Cross-platform", "Decentralized",
    "Distributed", "Enhanced", "Ergonomic", "Integrated", "Multi-layered", "Optimized",
    "Proactive", "Robust", "Seamless", "Synergistic", "Universal", "Virtual",
];

const CATCH_PHRASE_DESCRIPTORS: &[&str] = &[
    "24/7", "asynchronous", "bottom-line", "client-driven", "dynamic", "empowering", "global",
    "heuristic", "interactive", "mission-critical", "modular", "real-time", "scalable",
    "stateless", "zero-defect",
];

const CATCH_PHRASE_NOUNS: &[&str] = &[
    "ability", "algorithm", "architecture", "benchmark", "capability", "encoding", "framework",
    "hierarchy", "infrastructure", "interface", "matrix", "methodology", "middleware", "paradigm",
    "pipeline", "solution", "throughput", "workforce",
];

/// Pick one entry of a non-empty pool.
pub(crate) fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

pub fn first_name<R: Rng>(rng: &mut R) -> String {
    pick(rng, FIRST_NAMES).to_string()
}

pub fn last_name<R: Rng>(rng: &mut R) -> String {
    pick(rng, LAST_NAMES).to_string()
}

pub fn name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

pub fn title<R: Rng>(rng: &mut R) -> String {
    pick(rng, TITLES).to_string()
}

pub fn job_title<R: Rng>(rng: &mut R) -> String {
    pick(rng, JOB_TITLES).to_string()
}

pub fn company<R: Rng>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{}-{}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    }
}

pub fn catch_phrase<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, CATCH_PHRASE_ADJECTIVES),
        pick(rng, CATCH_PHRASE_DESCRIPTORS),
        pick(rng, CATCH_PHRASE_NOUNS)
    )
}
