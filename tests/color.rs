mod tests {
    use button_light_controller::{COLOR_COUNT, PALETTE, Rgb, palette_color, wheel};

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[test]
    fn test_palette_order() {
        assert_eq!(PALETTE.len(), COLOR_COUNT as usize);
        assert_eq!(PALETTE[0], RED);
        assert_eq!(PALETTE[1], Rgb::new(255, 255, 0));
        assert_eq!(PALETTE[2], GREEN);
        assert_eq!(PALETTE[3], Rgb::new(0, 255, 255));
        assert_eq!(PALETTE[4], BLUE);
        assert_eq!(PALETTE[5], Rgb::new(255, 0, 255));
        assert_eq!(PALETTE[6], WHITE);
    }

    #[test]
    fn test_palette_color_lookup() {
        assert_eq!(palette_color(0), RED);
        assert_eq!(palette_color(4), BLUE);
        assert_eq!(palette_color(6), WHITE);
    }

    #[test]
    fn test_wheel_segment_boundaries() {
        // Fixed points of the three-segment formula with p = 255 - pos.
        assert_eq!(wheel(0), RED);
        assert_eq!(wheel(85), GREEN);
        assert_eq!(wheel(170), BLUE);
        assert_eq!(wheel(255), RED);
    }

    #[test]
    fn test_wheel_interior_values() {
        // pos = 1: p = 254, third segment, p - 170 = 84.
        assert_eq!(wheel(1), Rgb::new(252, 3, 0));
        // pos = 86: p = 169, second segment, p - 85 = 84.
        assert_eq!(wheel(86), Rgb::new(0, 252, 3));
        // pos = 171: p = 84, first segment.
        assert_eq!(wheel(171), Rgb::new(3, 0, 252));
    }

    #[test]
    fn test_wheel_channels_sum_constant() {
        // Every wheel color keeps total intensity at 255.
        for pos in 0..=u8::MAX {
            let c = wheel(pos);
            assert_eq!(u16::from(c.r) + u16::from(c.g) + u16::from(c.b), 255);
        }
    }
}
