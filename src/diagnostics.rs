//! Post-mutation NaN check for [`Vector4`].
//!
//! Off by default. Building with the `nan-diagnostics` feature in a debug
//! profile turns the hook into a `log::warn!` whenever a vector ends up with a
//! non-finite component. Values are never altered and nothing panics, so
//! release behavior is identical either way.

use crate::Vector4;

/// Whether [`check_nan`] does anything in this build.
pub const fn enabled() -> bool {
    cfg!(all(feature = "nan-diagnostics", debug_assertions))
}

#[inline]
pub fn check_nan(v: &Vector4) {
    if enabled() {
        report_non_finite(v);
    }
}

cfg_if::cfg_if! {
    if #[cfg(all(feature = "nan-diagnostics", debug_assertions))] {
        fn report_non_finite(v: &Vector4) {
            if v.contains_nan() {
                log::warn!("Vector4 has a non-finite component: {v}");
            }
        }
    } else {
        #[inline(always)]
        fn report_non_finite(_: &Vector4) {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    cfg_if::cfg_if! {
        if #[cfg(all(feature = "nan-diagnostics", debug_assertions))] {
            use log::{Level, Log, Metadata, Record};
            use std::cell::RefCell;
            use std::sync::Once;

            use crate::LinearColor;

            thread_local! {
                static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
            }

            // Keeps records per test thread, then hands them on to env_logger.
            struct RecordingLogger {
                inner: env_logger::Logger,
            }

            impl Log for RecordingLogger {
                fn enabled(&self, _: &Metadata) -> bool {
                    true
                }

                fn log(&self, record: &Record) {
                    RECORDS.with(|records| {
                        records
                            .borrow_mut()
                            .push((record.level(), record.args().to_string()))
                    });
                    self.inner.log(record);
                }

                fn flush(&self) {
                    self.inner.flush();
                }
            }

            fn init_logger() {
                static INSTALL: Once = Once::new();
                INSTALL.call_once(|| {
                    let inner = env_logger::Builder::new().is_test(true).build();
                    log::set_boxed_logger(Box::new(RecordingLogger { inner }))
                        .expect("logger already installed");
                    log::set_max_level(log::LevelFilter::Trace);
                });
                take_records();
            }

            fn take_records() -> Vec<(Level, String)> {
                RECORDS.with(|records| std::mem::take(&mut *records.borrow_mut()))
            }

            fn assert_single_warning(label: &str, op: impl FnOnce()) {
                take_records();
                op();
                let records = take_records();
                assert_eq!(records.len(), 1, "{label}: {records:?}");
                assert_eq!(records[0].0, Level::Warn, "{label}");
                assert!(records[0].1.contains("x=NaN"), "{label}: {}", records[0].1);
            }

            fn nan_x() -> Vector4 {
                Vector4::new(f32::NAN, 0.0, 0.0, 0.0)
            }

            #[test]
            fn warns_after_each_mutation() {
                init_logger();
                assert!(enabled());

                let ones = Vector4::new(1.0, 1.0, 1.0, 1.0);
                assert_single_warning("+=", || {
                    let mut v = ones;
                    v += nan_x();
                });
                assert_single_warning("-=", || {
                    let mut v = ones;
                    v -= nan_x();
                });
                assert_single_warning("*= vector", || {
                    let mut v = ones;
                    v *= nan_x();
                });
                assert_single_warning("*= scalar", || {
                    let mut v = ones;
                    v *= f32::NAN;
                });
                assert_single_warning("/= vector", || {
                    let mut v = ones;
                    v /= nan_x();
                });
                assert_single_warning("/= scalar", || {
                    let mut v = ones;
                    v /= f32::NAN;
                });
                assert_single_warning("set", || {
                    let mut v = ones;
                    v.set(f32::NAN, 0.0, 0.0, 0.0);
                });
                assert_single_warning("from color", || {
                    let _ = Vector4::from(LinearColor::new(f32::NAN, 0.0, 0.0, 1.0));
                });
                assert_single_warning("from array", || {
                    let _ = Vector4::from([f32::NAN, 0.0, 0.0, 1.0]);
                });
                assert_single_warning("parse", || {
                    let _ = "x=NaN y=0 z=0".parse::<Vector4>();
                });
            }

            #[test]
            fn finite_results_stay_quiet() {
                init_logger();
                let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
                v += Vector4::new(1.0, 1.0, 1.0, 1.0);
                v *= 2.0;
                v /= 4.0;
                v.set(1.0, 0.0, 0.0, 1.0);
                let _ = Vector4::from([1.0, 2.0, 3.0, 4.0]);
                let _ = "x=1 y=2 z=3".parse::<Vector4>();
                assert!(take_records().is_empty());
            }
        } else {
            fn init_logger() {
                let _ = env_logger::builder().is_test(true).try_init();
            }
        }
    }

    #[test]
    fn check_never_alters_or_panics() {
        init_logger();
        let mut v = Vector4::new(f32::NAN, 1.0, f32::INFINITY, 0.0);
        check_nan(&v);
        v += Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert!(v.x.is_nan());
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, f32::INFINITY);
    }

    #[test]
    fn enabled_tracks_feature() {
        assert_eq!(
            enabled(),
            cfg!(feature = "nan-diagnostics") && cfg!(debug_assertions)
        );
    }
}
