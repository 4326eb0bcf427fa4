mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use led_strip_engine::color::Rgb;
    use led_strip_engine::{
        Command, CommandQueue, Dispatcher, Duration, Engine, FrameScheduler, Instant,
        OutputDriver, SettingsStore, SharedStripLen,
    };

    const MAX_LEDS: usize = 300;
    const QUEUE: usize = 8;

    struct NullStore;

    impl SettingsStore for NullStore {
        fn load_int(&mut self, _key: &str, default: i64) -> i64 {
            default
        }

        fn save_int(&mut self, _key: &str, _value: i64) {}
    }

    #[derive(Default)]
    struct DriverLog {
        configured: Vec<usize>,
        writes: Vec<usize>,
        fail_configure: bool,
    }

    #[derive(Clone, Default)]
    struct FakeDriver {
        log: Rc<RefCell<DriverLog>>,
    }

    impl OutputDriver for FakeDriver {
        type Error = &'static str;

        fn configure(&mut self, led_count: usize) -> Result<(), Self::Error> {
            let mut log = self.log.borrow_mut();
            if log.fail_configure {
                return Err("bind failed");
            }
            log.configured.push(led_count);
            Ok(())
        }

        fn write(&mut self, colors: &[Rgb]) {
            self.log.borrow_mut().writes.push(colors.len());
        }
    }

    struct Fixture {
        queue: CommandQueue<QUEUE>,
        strip_len: SharedStripLen,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                queue: CommandQueue::new(),
                strip_len: SharedStripLen::new(0),
            }
        }

        fn scheduler(
            &self,
            driver: FakeDriver,
        ) -> FrameScheduler<'_, FakeDriver, NullStore, MAX_LEDS, QUEUE> {
            let engine = Engine::new(&self.queue, &self.strip_len, NullStore);
            FrameScheduler::new(engine, driver)
        }

        fn dispatcher(&self) -> Dispatcher<'_, MAX_LEDS, QUEUE> {
            Dispatcher::new(&self.queue, &self.strip_len)
        }
    }

    #[test]
    fn test_first_tick_binds_output_and_writes() {
        let fixture = Fixture::new();
        let driver = FakeDriver::default();
        let mut scheduler = fixture.scheduler(driver.clone());

        let result = scheduler.tick(Instant::from_millis(0));

        let log = driver.log.borrow();
        assert_eq!(log.configured, vec![50]);
        assert_eq!(log.writes, vec![50]);
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_on_time_ticks_keep_a_fixed_cadence() {
        let fixture = Fixture::new();
        let driver = FakeDriver::default();
        let mut scheduler = fixture.scheduler(driver.clone());

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(20));

        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
        assert_eq!(driver.log.borrow().writes.len(), 2);
    }

    #[test]
    fn test_late_tick_resets_schedule_without_backlog() {
        let fixture = Fixture::new();
        let driver = FakeDriver::default();
        let mut scheduler = fixture.scheduler(driver.clone());

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(500));

        // One frame for this tick, not 24 catch-up frames.
        assert_eq!(driver.log.borrow().writes.len(), 2);
        assert_eq!(result.next_deadline, Instant::from_millis(520));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_slightly_behind_tick_requests_no_sleep() {
        let fixture = Fixture::new();
        let driver = FakeDriver::default();
        let mut scheduler = fixture.scheduler(driver.clone());

        scheduler.tick(Instant::from_millis(0));
        // 25 ms late, still within the drift window.
        let result = scheduler.tick(Instant::from_millis(45));

        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_length_change_rebinds_output_driver() {
        let fixture = Fixture::new();
        let driver = FakeDriver::default();
        let mut scheduler = fixture.scheduler(driver.clone());

        scheduler.tick(Instant::from_millis(0));
        fixture
            .dispatcher()
            .dispatch(Command::SetStripLength(10))
            .unwrap();
        scheduler.tick(Instant::from_millis(20));

        let log = driver.log.borrow();
        assert_eq!(log.configured, vec![50, 10]);
        assert_eq!(log.writes, vec![50, 10]);
    }

    #[test]
    fn test_failed_rebind_keeps_rendering() {
        let fixture = Fixture::new();
        let driver = FakeDriver::default();
        let mut scheduler = fixture.scheduler(driver.clone());

        scheduler.tick(Instant::from_millis(0));
        driver.log.borrow_mut().fail_configure = true;
        fixture
            .dispatcher()
            .dispatch(Command::SetStripLength(25))
            .unwrap();
        let result = scheduler.tick(Instant::from_millis(20));

        let log = driver.log.borrow();
        assert_eq!(log.configured, vec![50]);
        // Frames still flow at the new length.
        assert_eq!(log.writes, vec![50, 25]);
        assert_eq!(result.next_deadline, Instant::from_millis(40));
    }
}
