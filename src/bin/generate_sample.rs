//! Writes a deterministic synthetic automotive CSV with the same schema as
//! the remote source, for offline use:  `carscope cars_sample.csv`.
//! A few malformed rows are included on purpose so the loader's
//! drop-incomplete-rows behavior is visible offline too.

use anyhow::{Context, Result};

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

struct Maker {
    name: &'static str,
    origin: &'static str,
    cylinders: &'static [u32],
    mpg: f64,
    horsepower: f64,
    weight: f64,
}

const MAKERS: &[Maker] = &[
    Maker { name: "Chevrolet", origin: "American", cylinders: &[6, 8], mpg: 17.0, horsepower: 150.0, weight: 3900.0 },
    Maker { name: "Ford", origin: "American", cylinders: &[6, 8], mpg: 16.0, horsepower: 145.0, weight: 3850.0 },
    Maker { name: "Plymouth", origin: "American", cylinders: &[4, 6, 8], mpg: 19.0, horsepower: 110.0, weight: 3400.0 },
    Maker { name: "Volkswagen", origin: "European", cylinders: &[4], mpg: 29.0, horsepower: 70.0, weight: 2100.0 },
    Maker { name: "Fiat", origin: "European", cylinders: &[4], mpg: 30.0, horsepower: 68.0, weight: 2000.0 },
    Maker { name: "Volvo", origin: "European", cylinders: &[4, 6], mpg: 22.0, horsepower: 105.0, weight: 2900.0 },
    Maker { name: "Toyota", origin: "Japanese", cylinders: &[4], mpg: 28.0, horsepower: 80.0, weight: 2250.0 },
    Maker { name: "Datsun", origin: "Japanese", cylinders: &[4, 6], mpg: 27.0, horsepower: 88.0, weight: 2300.0 },
    Maker { name: "Honda", origin: "Japanese", cylinders: &[4], mpg: 32.0, horsepower: 65.0, weight: 1900.0 },
];

const CARS_PER_MAKER: usize = 8;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "cars_sample.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer
        .write_record([
            "Car",
            "Manufacturer",
            "MPG",
            "Horsepower",
            "Weight",
            "Acceleration",
            "Cylinders",
            "Origin",
            "Displacement",
        ])
        .context("writing header")?;

    let mut rows = 0usize;
    for maker in MAKERS {
        for i in 1..=CARS_PER_MAKER {
            let cylinders = *rng.pick(maker.cylinders);
            // Bigger engines trade fuel economy for power.
            let size_factor = cylinders as f64 / 4.0;
            let mpg = (rng.gauss(maker.mpg / size_factor.sqrt(), 2.0)).max(8.0);
            let horsepower = (rng.gauss(maker.horsepower * size_factor, 12.0)).max(40.0);
            let weight = (rng.gauss(maker.weight * size_factor.sqrt(), 180.0)).max(1400.0);
            let acceleration = (rng.gauss(19.0 - horsepower / 25.0, 1.2)).max(7.0);
            let displacement = rng.gauss(horsepower * 2.1, 12.0).max(60.0);

            writer
                .write_record([
                    format!("{} Model {i}", maker.name),
                    maker.name.to_string(),
                    format!("{mpg:.1}"),
                    format!("{horsepower:.1}"),
                    format!("{weight:.0}"),
                    format!("{acceleration:.1}"),
                    cylinders.to_string(),
                    maker.origin.to_string(),
                    format!("{displacement:.1}"),
                ])
                .context("writing row")?;
            rows += 1;
        }
    }

    // Rows the loader must drop or partially accept.
    let irregular: &[[&str; 9]] = &[
        ["Ford Incomplete", "Ford", "", "120.0", "3600", "13.0", "8", "American", "302.0"],
        ["Fiat Typo", "Fiat", "31.0", "n/a", "1950", "16.5", "4", "European", "79.0"],
        ["Toyota No Cyl", "Toyota", "27.5", "82.0", "2300", "15.8", "", "Japanese", "108.0"],
        ["Acme Import", "Acme", "21.0", "95.0", "2800", "14.5", "4", "Unknown", "140.0"],
    ];
    for row in irregular {
        writer.write_record(*row).context("writing row")?;
        rows += 1;
    }

    writer.flush().context("flushing output")?;

    println!("Wrote {rows} rows to {output_path}");
    Ok(())
}
