//! Writes a deterministic `spacex_launch_dash.csv` so the dashboard can run
//! without the original dataset.

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
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (site, launch count, base success rate)
    let sites: [(&str, usize, f64); 4] = [
        ("CCAFS LC-40", 26, 0.60),
        ("CCAFS SLC-40", 7, 0.43),
        ("KSC LC-39A", 13, 0.77),
        ("VAFB SLC-4E", 10, 0.40),
    ];

    // (booster family, serial range, success-rate bonus)
    let boosters: [(&str, (u32, u32), f64); 4] = [
        ("F9 v1.0", (3, 7), -0.25),
        ("F9 v1.1", (1003, 1018), -0.10),
        ("F9 FT", (1019, 1038), 0.05),
        ("F9 B5", (1046, 1060), 0.20),
    ];

    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "class",
            "Payload Mass (kg)",
            "Booster Version",
        ])
        .expect("Failed to write header");

    let mut flight_no = 0u32;
    for (site, count, base_rate) in sites {
        for _ in 0..count {
            flight_no += 1;

            let (family, (serial_lo, serial_hi), bonus) = *rng.pick(&boosters);
            let serial = serial_lo + (rng.next_u64() % (serial_hi - serial_lo + 1) as u64) as u32;

            // Payloads cluster below ~6000 kg with the occasional heavy one.
            let payload = if rng.next_f64() < 0.8 {
                rng.next_f64() * 6000.0
            } else {
                6000.0 + rng.next_f64() * 3600.0
            };

            let rate = (base_rate + bonus).clamp(0.05, 0.95);
            let class = if rng.next_f64() < rate { 1 } else { 0 };

            writer
                .write_record([
                    flight_no.to_string(),
                    site.to_string(),
                    class.to_string(),
                    format!("{payload:.1}"),
                    format!("{family}  B{serial:04}"),
                ])
                .expect("Failed to write row");
        }
    }

    writer.flush().expect("Failed to flush writer");
    println!("Wrote {flight_no} launches to {output_path}");
}
