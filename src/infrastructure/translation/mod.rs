mod google_translate_engine;
mod libre_translate_engine;
mod translation_engine_factory;

pub use google_translate_engine::GoogleTranslateEngine;
pub use libre_translate_engine::LibreTranslateEngine;
pub use translation_engine_factory::TranslationEngineFactory;
