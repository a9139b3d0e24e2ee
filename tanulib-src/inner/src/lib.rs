#[macro_export]
macro_rules! reexport {
    ( $($member:ident,)* ) => { $(
        #[doc(inline)]
        pub use $member::{self, *};
    )* };
}
