use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Uniform jitter in `[-spread, spread)`.
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * spread
    }
}

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Institution")]
    institution: &'static str,
    #[serde(rename = "Project Title")]
    title: String,
    #[serde(rename = "Project Country")]
    country: Option<&'static str>,
    #[serde(rename = "Project Leader(s)")]
    leaders: String,
    #[serde(rename = "Latitude")]
    latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    longitude: Option<f64>,
}

/// Country name with an approximate centroid (lat, lon).
const COUNTRIES: &[(&str, f64, f64)] = &[
    ("Kenya", 0.02, 37.9),
    ("Palestine", 31.9, 35.2),
    ("Kosovo", 42.6, 20.9),
    ("Nepal", 28.4, 84.1),
    ("Peru", -9.2, -75.0),
    ("Guatemala", 15.8, -90.2),
    ("Uganda", 1.4, 32.3),
    ("India", 20.6, 78.9),
    ("Bosnia and Herzegovina", 43.9, 17.7),
    ("Haiti", 19.0, -72.3),
    ("Papua New Guinea", -6.3, 143.9),
    ("Colombia", 4.6, -74.1),
];

const INSTITUTIONS: &[&str] = &[
    "Middlebury College",
    "Bates College",
    "Colby College",
    "Princeton University",
    "University of Virginia",
    "Wellesley College",
];

const THEMES: &[&str] = &[
    "Clean Water",
    "Girls' Education",
    "Peace Through Football",
    "Solar Classrooms",
    "Youth Dialogue",
    "Community Gardens",
    "Women's Cooperative",
];

const FIRST_NAMES: &[&str] = &["Amina", "Jonah", "Lucía", "Priya", "Tomas", "Grace", "Omar"];
const LAST_NAMES: &[&str] = &["Otieno", "Haddad", "Quispe", "Sharma", "Berisha", "Mensah", "Kim"];

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "sample_projects.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let mut written = 0;
    for year in 2007..=2025 {
        for _ in 0..6 {
            let (country, lat, lon) = *rng.pick(COUNTRIES);
            let leaders = if rng.next_f64() < 0.4 {
                format!(
                    "{} {}, {} {}",
                    rng.pick(FIRST_NAMES),
                    rng.pick(LAST_NAMES),
                    rng.pick(FIRST_NAMES),
                    rng.pick(LAST_NAMES)
                )
            } else {
                format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES))
            };

            // Spreadsheet exports sometimes format the year with a thousands separator.
            let year_text = if rng.next_f64() < 0.2 {
                format!("{},{:03}", year / 1000, year % 1000)
            } else {
                year.to_string()
            };
            // A few rows lose their geocoding, a few lose the country.
            let geocoded = rng.next_f64() > 0.05;
            let country = (rng.next_f64() > 0.03).then_some(country);

            writer.serialize(Row {
                year: year_text,
                institution: *rng.pick(INSTITUTIONS),
                title: format!("{} in {}", rng.pick(THEMES), country.unwrap_or("the Region")),
                country,
                leaders,
                latitude: geocoded.then(|| lat + rng.jitter(1.5)),
                longitude: Some(lon + rng.jitter(1.5)),
            })?;
            written += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {written} projects to {output_path}");
    Ok(())
}
