//! Tests for palettes and colour assignment

#[cfg(test)]
mod tests {
    use irregrid::GridError;
    use irregrid::algorithm::random::{RandomSource, SeededRandom};
    use irregrid::io::palette::{Palette, assign_colours, parse_hex};
    use irregrid::spatial::geometry::{Dims, Placement, Pos};

    struct FixedRandom(f64);

    impl RandomSource for FixedRandom {
        fn uniform(&mut self) -> f64 {
            self.0
        }
    }

    // Tests hex parsing with and without the leading hash
    // Verified by parsing channels in reverse order
    #[test]
    fn test_parse_hex() {
        assert!(matches!(parse_hex("#5a3034"), Ok([0x5a, 0x30, 0x34, 255])));
        assert!(matches!(parse_hex("FEF9C6"), Ok([0xfe, 0xf9, 0xc6, 255])));
    }

    // Tests malformed colours are rejected as palette errors
    // Verified by accepting sign characters from radix parsing
    #[test]
    fn test_parse_hex_rejects_malformed() {
        for bad in ["", "#12345", "#1234567", "#12345g", "+12345"] {
            assert!(
                matches!(parse_hex(bad), Err(GridError::InvalidPalette { .. })),
                "{bad} should be rejected"
            );
        }
    }

    // Tests a palette needs at least one fill colour
    // Verified by removing the empty check
    #[test]
    fn test_empty_fills_rejected() {
        let black = [0, 0, 0, 255];

        assert!(Palette::new(Vec::new(), black, black, black).is_err());
        assert!(Palette::new(vec![black], black, black, black).is_ok());
    }

    // Tests the sunrise palette also fills blocks with its ground colour
    // Verified by splitting the background off the fill list
    #[test]
    fn test_sunrise_layout() {
        let Ok(palette) = Palette::sunrise() else {
            unreachable!("built-in palette");
        };

        assert_eq!(palette.fills().len(), 8);
        assert_eq!(palette.background(), [0x5a, 0x30, 0x34, 255]);
        assert_eq!(palette.guidelines(), [0xfe, 0xf9, 0xc6, 255]);
        assert_eq!(palette.outline(), [0x40, 0x40, 0x40, 255]);
        assert_eq!(palette.fills().last(), Some(&palette.background()));
    }

    // Tests the carnival outline is one of its own fills
    // Verified by using the background as outline
    #[test]
    fn test_carnival_outline_from_fills() {
        let mut random = SeededRandom::new(5);
        let Ok(palette) = Palette::carnival(&mut random) else {
            unreachable!("built-in palette");
        };

        assert_eq!(palette.fills().len(), 13);
        assert!(palette.fills().contains(&palette.outline()));
        assert_eq!(palette.background(), [0x6d, 0x35, 0x8a, 255]);
    }

    // Tests the random preset selects by the first draw
    // Verified by inverting the preset choice
    #[test]
    fn test_random_preset_choice() {
        let sunrise = Palette::random_preset(&mut FixedRandom(0.1));
        let carnival = Palette::random_preset(&mut FixedRandom(0.9));

        let (Ok(sunrise), Ok(carnival)) = (sunrise, carnival) else {
            unreachable!("built-in palettes");
        };
        assert_eq!(sunrise.fills().len(), 8);
        assert_eq!(carnival.fills().len(), 13);
    }

    // Tests every placement receives exactly one fill colour in order
    // Verified by colouring only the first placement
    #[test]
    fn test_assign_colours() {
        let Ok(palette) = Palette::from_hex(&["#ff0000", "#00ff00"], "#000000", "#ffffff", "#808080")
        else {
            unreachable!("valid palette");
        };
        let placements = [
            Placement::new(Pos::new(0, 0), Dims::new(2, 1)),
            Placement::new(Pos::new(2, 0), Dims::UNIT),
        ];

        let blocks = assign_colours(&placements, &palette, &mut FixedRandom(0.6));

        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|block| block.colour == [0, 255, 0, 255]));
        let geometry: Vec<Placement> = blocks.iter().map(|block| block.placement).collect();
        assert_eq!(geometry, placements);
    }
}
