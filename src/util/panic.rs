/// Asserts that the block panics. The block is wrapped in [`AssertUnwindSafe`] so that it may
/// capture collections by reference; only use it where the captured state isn't inspected after
/// the panic, or where the collection is documented to stay valid across one.
///
/// [`AssertUnwindSafe`]: std::panic::AssertUnwindSafe
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
    };
}

pub(crate) use assert_panics;
