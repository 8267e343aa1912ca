/// Declare a null object type mimicking a host model.
///
/// ```ignore
/// standin::null_object!(pub OrderNullObject mimics Order);
///
/// let order = OrderNullObject::null()?;
/// ```
///
/// The generated marker's path is its module path plus its name, so
/// nested types read as `app::OrderNullObject::CustomerNullObject`.
#[macro_export]
macro_rules! null_object {
    ($(#[$meta:meta])* $vis:vis $name:ident mimics $model:ty $(;)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        $vis struct $name;

        impl $crate::core::traits::Path for $name {
            const PATH: &'static str = concat!(module_path!(), "::", stringify!($name));
        }

        impl $crate::core::traits::Mimics for $name {
            type Model = $model;
        }
    };
}
