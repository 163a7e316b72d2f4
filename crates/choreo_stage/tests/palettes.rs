use choreo_core::Color;
use choreo_stage::palette;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn rainbow_spreads_hues_evenly() {
    let colors = palette::rainbow(4);
    let hues: Vec<f32> = colors.iter().map(|c| c.to_hsl().0).collect();
    assert_eq!(hues, vec![0.0, 90.0, 180.0, 270.0]);

    for color in colors {
        let (_, s, l) = color.to_hsl();
        assert_eq!((s, l), (60.0, 80.0));
    }
}

#[test]
fn pastel_channels_stay_in_the_soft_band() {
    let mut rng = StdRng::seed_from_u64(11);
    for color in palette::pastel(50, &mut rng) {
        match color {
            Color::Rgb { r, g, b } => {
                for channel in [r, g, b] {
                    assert!((180..255).contains(&channel), "channel {} off-band", channel);
                }
            }
            other => panic!("pastel produced a non-RGB color: {:?}", other),
        }
    }
}

#[test]
fn warm_and_cool_use_their_hue_arcs() {
    let mut rng = StdRng::seed_from_u64(11);

    for color in palette::warm(50, &mut rng) {
        let (h, s, l) = color.to_hsl();
        assert!(h < 60.0, "warm hue {} out of arc", h);
        assert!((40.0..80.0).contains(&s));
        assert!((70.0..90.0).contains(&l));
    }

    for color in palette::cool(50, &mut rng) {
        let (h, _, _) = color.to_hsl();
        assert!((180.0..300.0).contains(&h), "cool hue {} out of arc", h);
    }
}

#[test]
fn monochromatic_steps_saturation_and_lightness() {
    let colors = palette::monochromatic(210.0, 5);

    for color in &colors {
        assert_eq!(color.to_hsl().0, 210.0);
    }
    let (_, first_s, first_l) = colors[0].to_hsl();
    let (_, last_s, last_l) = colors[4].to_hsl();
    assert_eq!((first_s, first_l), (40.0, 70.0));
    assert_eq!((last_s, last_l), (80.0, 90.0));
}

#[test]
fn monochromatic_single_color_uses_the_band_floor() {
    let colors = palette::monochromatic(45.0, 1);
    assert_eq!(colors, vec![Color::hsl(45.0, 40.0, 70.0)]);
}

#[test]
fn gradient_hits_both_endpoints() {
    let from = Color::hsl(20.0, 50.0, 60.0);
    let to = Color::hsl(200.0, 80.0, 40.0);
    let colors = palette::gradient(from, to, 3);

    assert_eq!(colors[0], from);
    assert_eq!(colors[2], to);

    let (mid_h, mid_s, mid_l) = colors[1].to_hsl();
    assert_eq!((mid_h, mid_s, mid_l), (110.0, 65.0, 50.0));
}

#[test]
fn gradient_with_one_step_returns_the_start() {
    let from = Color::hsl(0.0, 100.0, 50.0);
    let to = Color::hsl(240.0, 100.0, 50.0);
    assert_eq!(palette::gradient(from, to, 1), vec![from]);
}
