
use phf::phf_map;

/// A decimal SI prefix, such as "k" (10^3) or "μ" (10^-6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MetricPrefix {
  pub symbol: &'static str,
  pub exponent: i32,
}

static SI_PREFIXES: phf::Map<&'static str, MetricPrefix> = phf_map! {
  "Q" => MetricPrefix::new("Q", 30),
  "R" => MetricPrefix::new("R", 27),
  "Y" => MetricPrefix::new("Y", 24),
  "Z" => MetricPrefix::new("Z", 21),
  "E" => MetricPrefix::new("E", 18),
  "P" => MetricPrefix::new("P", 15),
  "T" => MetricPrefix::new("T", 12),
  "G" => MetricPrefix::new("G", 9),
  "M" => MetricPrefix::new("M", 6),
  "k" => MetricPrefix::new("k", 3),
  "h" => MetricPrefix::new("h", 2),
  "da" => MetricPrefix::new("da", 1),
  "d" => MetricPrefix::new("d", -1),
  "c" => MetricPrefix::new("c", -2),
  "m" => MetricPrefix::new("m", -3),
  // Note: We accept both "u" and "μ" for micro.
  "u" => MetricPrefix::new("μ", -6),
  "μ" => MetricPrefix::new("μ", -6),
  "n" => MetricPrefix::new("n", -9),
  "p" => MetricPrefix::new("p", -12),
  "f" => MetricPrefix::new("f", -15),
  "a" => MetricPrefix::new("a", -18),
  "z" => MetricPrefix::new("z", -21),
  "y" => MetricPrefix::new("y", -24),
  "r" => MetricPrefix::new("r", -27),
  "q" => MetricPrefix::new("q", -30),
};

impl MetricPrefix {
  pub const KILO: MetricPrefix = MetricPrefix::new("k", 3);
  pub const MEGA: MetricPrefix = MetricPrefix::new("M", 6);
  pub const CENTI: MetricPrefix = MetricPrefix::new("c", -2);
  pub const MILLI: MetricPrefix = MetricPrefix::new("m", -3);
  pub const MICRO: MetricPrefix = MetricPrefix::new("μ", -6);

  pub const fn new(symbol: &'static str, exponent: i32) -> MetricPrefix {
    MetricPrefix { symbol, exponent }
  }

  /// The multiplier this prefix applies, i.e. `10^exponent`.
  pub fn factor(&self) -> f64 {
    10f64.powi(self.exponent)
  }

  /// Looks up an SI prefix by its symbol.
  pub fn lookup(symbol: &str) -> Option<MetricPrefix> {
    SI_PREFIXES.get(symbol).copied()
  }

  /// All SI prefixes, largest first. The ASCII alias "u" for micro is
  /// not listed separately.
  pub fn si_prefixes() -> Vec<MetricPrefix> {
    let mut prefixes: Vec<_> = SI_PREFIXES.entries()
      .filter(|(key, prefix)| **key == prefix.symbol)
      .map(|(_, prefix)| *prefix)
      .collect();
    prefixes.sort_by(|a, b| b.exponent.cmp(&a.exponent));
    prefixes
  }
}
