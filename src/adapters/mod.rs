// Adapters layer: concrete webtoon backends.

pub mod backends;

pub use backends::{builtin_backend, DaumApi, KToonApi, KakaoPageApi, NateApi, NaverApi, OneStoreApi};
