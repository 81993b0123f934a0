//! 텍스트 전처리: 정규화, 문자 변환, 중국어 간체화

pub mod chinese;
pub mod normalize;
pub mod transliterate;

pub use chinese::ChineseConverter;
pub use normalize::{casefold, casefold_with_i_dots, normalize, remove_marks};
pub use transliterate::transliterate;
