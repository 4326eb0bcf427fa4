mod tests {
    use led_strip_engine::{
        Ack, Command, CommandError, CommandQueue, Dispatcher, PatternId, SharedStripLen,
    };

    const MAX_LEDS: usize = 300;

    #[test]
    fn test_set_strip_length_bounds() {
        let queue = CommandQueue::<8>::new();
        let strip_len = SharedStripLen::new(50);
        let dispatcher = Dispatcher::<MAX_LEDS, 8>::new(&queue, &strip_len);

        assert_eq!(
            dispatcher.dispatch(Command::SetStripLength(1)),
            Ok(Ack::Accepted)
        );
        assert_eq!(
            dispatcher.dispatch(Command::SetStripLength(300)),
            Ok(Ack::Accepted)
        );
        assert_eq!(
            dispatcher.dispatch(Command::SetStripLength(0)),
            Err(CommandError::InvalidLedCount)
        );
        assert_eq!(
            dispatcher.dispatch(Command::SetStripLength(301)),
            Err(CommandError::InvalidLedCount)
        );
        assert_eq!(
            dispatcher.dispatch(Command::SetStripLength(-5)),
            Err(CommandError::InvalidLedCount)
        );

        // Only the two valid commands reached the queue.
        assert_eq!(queue.pop(), Some(Command::SetStripLength(1)));
        assert_eq!(queue.pop(), Some(Command::SetStripLength(300)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_set_speed_bounds() {
        let queue = CommandQueue::<8>::new();
        let strip_len = SharedStripLen::new(50);
        let dispatcher = Dispatcher::<MAX_LEDS, 8>::new(&queue, &strip_len);

        assert_eq!(dispatcher.dispatch(Command::SetSpeed(0.1)), Ok(Ack::Accepted));
        assert_eq!(dispatcher.dispatch(Command::SetSpeed(2.0)), Ok(Ack::Accepted));
        assert_eq!(
            dispatcher.dispatch(Command::SetSpeed(0.05)),
            Err(CommandError::InvalidSpeed)
        );
        assert_eq!(
            dispatcher.dispatch(Command::SetSpeed(2.5)),
            Err(CommandError::InvalidSpeed)
        );
        assert_eq!(
            dispatcher.dispatch(Command::SetSpeed(f32::NAN)),
            Err(CommandError::InvalidSpeed)
        );
    }

    #[test]
    fn test_set_color_rejects_out_of_range_channel() {
        let queue = CommandQueue::<8>::new();
        let strip_len = SharedStripLen::new(50);
        let dispatcher = Dispatcher::<MAX_LEDS, 8>::new(&queue, &strip_len);

        assert_eq!(
            dispatcher.dispatch(Command::SetColor { r: 300, g: 0, b: 0 }),
            Err(CommandError::InvalidColor)
        );
        assert_eq!(
            dispatcher.dispatch(Command::SetColor { r: 0, g: -1, b: 0 }),
            Err(CommandError::InvalidColor)
        );
        assert_eq!(queue.pop(), None);

        assert_eq!(
            dispatcher.dispatch(Command::SetColor { r: 255, g: 128, b: 0 }),
            Ok(Ack::Accepted)
        );
    }

    #[test]
    fn test_set_pixel_validates_against_current_strip_length() {
        let queue = CommandQueue::<8>::new();
        let strip_len = SharedStripLen::new(50);
        let dispatcher = Dispatcher::<MAX_LEDS, 8>::new(&queue, &strip_len);

        assert_eq!(
            dispatcher.dispatch(Command::SetPixel { index: 49, on: true }),
            Ok(Ack::Accepted)
        );
        assert_eq!(
            dispatcher.dispatch(Command::SetPixel { index: 50, on: true }),
            Err(CommandError::InvalidLedIndex)
        );
        assert_eq!(
            dispatcher.dispatch(Command::SetPixel { index: -1, on: true }),
            Err(CommandError::InvalidLedIndex)
        );
    }

    #[test]
    fn test_reset_is_acknowledged_but_never_queued() {
        let queue = CommandQueue::<8>::new();
        let strip_len = SharedStripLen::new(50);
        let dispatcher = Dispatcher::<MAX_LEDS, 8>::new(&queue, &strip_len);

        assert_eq!(
            dispatcher.dispatch(Command::Reset),
            Ok(Ack::RestartRequested)
        );
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_full_queue_drops_command() {
        let queue = CommandQueue::<2>::new();
        let strip_len = SharedStripLen::new(50);
        let dispatcher = Dispatcher::<MAX_LEDS, 2>::new(&queue, &strip_len);

        let command = Command::SelectPattern(PatternId::Chase);
        assert_eq!(dispatcher.dispatch(command), Ok(Ack::Accepted));
        assert_eq!(dispatcher.dispatch(command), Ok(Ack::Accepted));
        assert_eq!(dispatcher.dispatch(command), Err(CommandError::Overloaded));

        // Queue contents untouched by the dropped command.
        assert_eq!(queue.pop(), Some(command));
        assert_eq!(queue.pop(), Some(command));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_pattern_message_maps_to_select_pattern() {
        let queue = CommandQueue::<8>::new();
        let strip_len = SharedStripLen::new(50);
        let dispatcher = Dispatcher::<MAX_LEDS, 8>::new(&queue, &strip_len);

        dispatcher.handle_pattern_message(" RAINBOW \n");
        assert_eq!(
            queue.pop(),
            Some(Command::SelectPattern(PatternId::Rainbow))
        );

        dispatcher.handle_pattern_message("MANUAL");
        assert_eq!(
            queue.pop(),
            Some(Command::SelectPattern(PatternId::Manual))
        );
    }

    #[test]
    fn test_unknown_pattern_message_is_ignored() {
        let queue = CommandQueue::<8>::new();
        let strip_len = SharedStripLen::new(50);
        let dispatcher = Dispatcher::<MAX_LEDS, 8>::new(&queue, &strip_len);

        dispatcher.handle_pattern_message("disco");
        dispatcher.handle_pattern_message("");
        dispatcher.handle_pattern_message("rainbow");
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_pattern_names_round_trip() {
        for id in [
            PatternId::VerticalWave,
            PatternId::Spiral,
            PatternId::Rainbow,
            PatternId::Gradient,
            PatternId::Chase,
            PatternId::Manual,
        ] {
            assert_eq!(PatternId::parse_from_str(id.as_str()), Some(id));
        }
    }
}
