/// Common interface for mutex implementations guarding a shared [`Sipo8`][crate::Sipo8].
///
/// The array itself does no locking and assumes a single caller at a time.  When it must be
/// reachable from more than one context (for example a main loop updating pins and a timer
/// interrupt triggering transfers), wrap it in a mutex and go through [`SipoMutex::lock()`] on
/// both sides.  `sipo-array` implements this trait for a number of existing mutex types.  Most of
/// them are guarded by a feature that needs to be enabled:
///
/// | Mutex | Feature Name | Notes |
/// | --- | --- | --- |
/// | [`core::cell::RefCell`] | _always available_ | For sharing within a single execution context. |
/// | [`std::sync::Mutex`][mutex-std] | `std` | For platforms where `std` is available. |
/// | [`critical_section::Mutex<RefCell>`][mutex-cs] | `critical-section` | Locks by entering a critical section, excluding interrupts for the duration of e.g. a transfer. |
///
/// [mutex-std]: https://doc.rust-lang.org/std/sync/struct.Mutex.html
/// [mutex-cs]: https://docs.rs/critical-section/latest/critical_section/struct.Mutex.html
///
/// For other mutex types, a custom implementation is needed.  Due to the orphan rule, it might be
/// necessary to wrap it in a newtype.  As an example, this is what such a custom implementation
/// might look like:
///
/// ```
/// struct MyMutex<T>(std::sync::Mutex<T>);
///
/// impl<T> sipo_array::SipoMutex for MyMutex<T> {
///     type Array = T;
///
///     fn create(v: T) -> Self {
///         Self(std::sync::Mutex::new(v))
///     }
///
///     fn lock<R, F: FnOnce(&mut Self::Array) -> R>(&self, f: F) -> R {
///         let mut v = self.0.lock().unwrap();
///         f(&mut v)
///     }
/// }
/// ```
pub trait SipoMutex {
    /// The array that is wrapped inside this mutex.
    type Array;

    /// Create a new mutex of this type.
    fn create(v: Self::Array) -> Self;

    /// Lock the mutex and give a closure access to the array inside.
    fn lock<R, F: FnOnce(&mut Self::Array) -> R>(&self, f: F) -> R;
}

impl<T> SipoMutex for core::cell::RefCell<T> {
    type Array = T;

    fn create(v: Self::Array) -> Self {
        core::cell::RefCell::new(v)
    }

    fn lock<R, F: FnOnce(&mut Self::Array) -> R>(&self, f: F) -> R {
        let mut v = self.borrow_mut();
        f(&mut v)
    }
}

#[cfg(any(test, feature = "std"))]
impl<T> SipoMutex for std::sync::Mutex<T> {
    type Array = T;

    fn create(v: Self::Array) -> Self {
        std::sync::Mutex::new(v)
    }

    fn lock<R, F: FnOnce(&mut Self::Array) -> R>(&self, f: F) -> R {
        let mut v = self.lock().unwrap();
        f(&mut v)
    }
}

#[cfg(feature = "critical-section")]
impl<T> SipoMutex for critical_section::Mutex<core::cell::RefCell<T>> {
    type Array = T;

    fn create(v: Self::Array) -> Self {
        critical_section::Mutex::new(core::cell::RefCell::new(v))
    }

    fn lock<R, F: FnOnce(&mut Self::Array) -> R>(&self, f: F) -> R {
        critical_section::with(|cs| {
            let mut v = self.borrow_ref_mut(cs);
            f(&mut v)
        })
    }
}
