use std::fs;

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

    /// Uniform value in `0..bound`.
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.below(items.len() as u64) as usize]
    }

    /// True once in `denominator` draws.
    fn one_in(&mut self, denominator: u64) -> bool {
        self.below(denominator) == 0
    }
}

const COUNTRIES: &[&str] = &[
    "United States",
    "India",
    "United Kingdom",
    "Japan",
    "South Korea",
    "Spain",
    "France",
    "Mexico",
    "Canada",
    "Germany",
    "Brazil",
    "Nigeria",
];

const MOVIE_RATINGS: &[&str] = &["PG", "PG-13", "R", "G"];
const SHOW_RATINGS: &[&str] = &["TV-MA", "TV-14", "TV-PG", "TV-Y7"];

const MOVIE_GENRES: &[&str] = &[
    "Dramas",
    "Comedies",
    "Action & Adventure",
    "Documentaries",
    "Thrillers",
    "Romantic Comedies",
    "Horror Movies",
    "International Movies",
];

const SHOW_GENRES: &[&str] = &[
    "TV Dramas",
    "TV Comedies",
    "Crime TV Shows",
    "Kids' TV",
    "Reality TV",
    "Docuseries",
];

const DIRECTORS: &[&str] = &[
    "Ana Flores",
    "Kenji Watanabe",
    "Maya Osei",
    "Tom Hardwick",
    "Lucia Moretti",
    "Priya Nair",
];

const TITLE_HEADS: &[&str] = &[
    "Midnight", "Paper", "Silent", "Golden", "Broken", "Electric", "Hidden", "Last",
];
const TITLE_TAILS: &[&str] = &[
    "Harbor", "Letters", "Season", "Orchard", "Circuit", "Promise", "Summit", "Garden",
];

const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

fn main() {
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "show_id", "type", "title", "director", "country", "date_added",
            "release_year", "rating", "duration", "listed_in",
        ])
        .expect("Failed to write header");

    let total = 200;
    for n in 0..total {
        let is_movie = rng.below(3) < 2; // roughly two movies per show
        let content_type = if is_movie { "Movie" } else { "TV Show" };

        let title = format!("{} {}", rng.pick(TITLE_HEADS), rng.pick(TITLE_TAILS));
        let director = if rng.one_in(7) { "" } else { rng.pick(DIRECTORS) };
        let country = if rng.one_in(11) { "" } else { rng.pick(COUNTRIES) };
        let rating = if rng.one_in(13) {
            ""
        } else if is_movie {
            rng.pick(MOVIE_RATINGS)
        } else {
            rng.pick(SHOW_RATINGS)
        };

        let date_added = if rng.one_in(17) {
            String::new()
        } else {
            format!(
                "{} {}, {}",
                rng.pick(MONTHS),
                1 + rng.below(28),
                2015 + rng.below(7)
            )
        };
        let release_year = (1990 + rng.below(32)).to_string();

        let duration = if is_movie {
            format!("{} min", 60 + rng.below(120))
        } else {
            format!("{} Seasons", 1 + rng.below(8))
        };

        let genres = if is_movie { MOVIE_GENRES } else { SHOW_GENRES };
        let first = rng.pick(genres);
        let second = rng.pick(genres);
        let listed_in = if first == second {
            first.to_string()
        } else {
            format!("{first}, {second}")
        };

        let show_id = format!("s{}", n + 1);
        writer
            .write_record([
                show_id.as_str(),
                content_type,
                title.as_str(),
                director,
                country,
                date_added.as_str(),
                release_year.as_str(),
                rating,
                duration.as_str(),
                listed_in.as_str(),
            ])
            .expect("Failed to write record");
    }

    let bytes = writer.into_inner().expect("Failed to flush CSV");
    let output_path = "data/netflix1.csv";
    fs::create_dir_all("data").expect("Failed to create data directory");
    fs::write(output_path, bytes).expect("Failed to write output file");

    println!("Wrote {total} catalog rows to {output_path}");
}
