//! Checked integer helpers for offset arithmetic
//!
//! Chunk lengths are read from untrusted data, so every addition on offsets
//! goes through these helpers instead of the plain operators.

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Operation {0:?} + {1:?} failed")]
    AddFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} - {1:?} failed")]
    SubFailed(Option<i128>, Option<i128>),
    #[error("Conversion failed for value {0:?}")]
    ConversionFailed(Option<i128>),
}

/// Same as `checked_add` functions but returns an error
///
/// ```
/// # use pngstrip::math::SafeAdd;
/// assert_eq!(8_usize.safe_add(12).unwrap(), 20);
/// assert!(u32::MAX.safe_add(1).is_err());
/// ```
pub trait SafeAdd: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as `checked_sub` functions but returns an error
pub trait SafeSub: Sized {
    fn safe_sub(self, rhs: Self) -> Result<Self, MathError>;
}

macro_rules! impl_operator {
    ($op:ident, $f:ident, $t:ty) => {
        paste::paste! {
            impl [< Safe $op >] for $t {
                fn [< safe_ $f >](self, rhs: $t) -> Result<$t, MathError> {
                    self.[< checked_ $f >](rhs).ok_or_else(|| {
                        MathError::[< $op Failed >](self.try_into().ok(), rhs.try_into().ok())
                    })
                }
            }
        }
    };
}

impl_operator!(Add, add, u32);
impl_operator!(Add, add, u64);
impl_operator!(Add, add, usize);
impl_operator!(Sub, sub, u32);
impl_operator!(Sub, sub, u64);
impl_operator!(Sub, sub, usize);

macro_rules! impl_conversion {
    ($target:ident, $($source:ty),*) => {
        paste::paste! {
            pub trait [< To $target:camel >]: Sized + TryInto<$target> + TryInto<i128> + Copy {
                fn $target(self) -> Result<$target, MathError> {
                    self.try_into()
                        .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
                }
            }

            $( impl [< To $target:camel >] for $source {} )*
        }
    };
}

impl_conversion!(usize, u32, u64);
impl_conversion!(u32, usize, u64);
impl_conversion!(u64, usize, u32);
