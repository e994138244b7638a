//! レジストリのライフサイクル全体を通した結合テスト

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::fs;

use googletest::prelude::*;
use mclang_i18n::{
    BundledDefaults,
    DEFAULT_PATTERN,
    LangI18n,
    config,
};
use tempfile::TempDir;

const EN_US: &str = "\
greeting=Hello, %1$s!\n\
death.message=%1$s was slain by %2$s\n\
motd=Welcome!\\nHave fun.\n";

const JA_JP: &str = "\
greeting=\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}\u{3001}%1$s!\n\
motd=\u{3088}\u{3046}\u{3053}\u{305d}!\n";

fn bundled() -> BundledDefaults {
    BundledDefaults::new().with("en_US", EN_US).with("ja_JP", JA_JP)
}

#[googletest::test]
fn registry_creates_language_files_and_translates() {
    let dir = TempDir::new().unwrap();

    let i18n = LangI18n::new(dir.path(), "en_US", Box::new(bundled()));

    expect_that!(i18n.current_language(), some(eq("en_US")));
    expect_that!(dir.path().join("en_US.lang").exists(), eq(true));

    let args = vec!["Steve".to_string()];
    expect_that!(i18n.translate("greeting", &args, DEFAULT_PATTERN), eq("Hello, Steve!"));

    // `\n` エスケープは実際の改行に展開される
    expect_that!(i18n.translate("motd", &[], DEFAULT_PATTERN), eq("Welcome!\nHave fun."));

    // 未登録キーはそのまま返る
    expect_that!(i18n.translate("unknown.key", &[], DEFAULT_PATTERN), eq("unknown.key"));
}

#[googletest::test]
fn user_edits_override_bundled_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en_US.lang"), "greeting=Howdy, %1$s!\n").unwrap();

    let i18n = LangI18n::new(dir.path(), "en_US", Box::new(bundled()));

    let args = vec!["Alex".to_string()];
    // ユーザーファイルが優先される
    expect_that!(i18n.translate("greeting", &args, DEFAULT_PATTERN), eq("Howdy, Alex!"));
    // デフォルトにしかないキーは補完される
    expect_that!(
        i18n.translate("death.message", &["Alex".to_string(), "Zombie".to_string()], DEFAULT_PATTERN),
        eq("Alex was slain by Zombie")
    );

    // 補完されたキーはファイルにも書き戻されている
    let written = fs::read_to_string(dir.path().join("en_US.lang")).unwrap();
    expect_that!(written, contains_substring("death.message=%1$s was slain by %2$s"));
    expect_that!(written, contains_substring("greeting=Howdy, %1$s!"));
}

#[googletest::test]
fn switching_languages_routes_translations() {
    let dir = TempDir::new().unwrap();
    let mut i18n = LangI18n::new(dir.path(), "en_US", Box::new(bundled()));

    assert_that!(i18n.load_or_create_language("ja_JP"), eq(true));
    assert_that!(i18n.choose_language("ja_JP"), eq(true));

    let args = vec!["Steve".to_string()];
    expect_that!(
        i18n.translate("greeting", &args, DEFAULT_PATTERN),
        eq("\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}\u{3001}Steve!")
    );
    // ja_JP に無いキーはそのまま返る（言語間フォールバックはしない）
    expect_that!(i18n.translate("death.message", &[], DEFAULT_PATTERN), eq("death.message"));

    // 未登録の言語コードでは選択は変わらない
    assert_that!(i18n.choose_language("de_DE"), eq(false));
    expect_that!(i18n.current_language(), some(eq("ja_JP")));
}

#[googletest::test]
fn discovery_picks_up_existing_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en_US.lang"), "greeting=Hello\n").unwrap();
    fs::write(dir.path().join("de_DE.lang"), "greeting=Hallo\n").unwrap();
    fs::write(dir.path().join("README.txt"), "ignored").unwrap();

    let mut i18n = LangI18n::new(dir.path(), "en_US", Box::new(BundledDefaults::new()));
    let loaded = i18n.load_all_languages();

    expect_that!(loaded, eq(2));
    expect_that!(i18n.language_codes(), elements_are![eq(&"de_DE"), eq(&"en_US")]);

    assert_that!(i18n.choose_language("de_DE"), eq(true));
    expect_that!(i18n.translate("greeting", &[], DEFAULT_PATTERN), eq("Hallo"));
}

#[googletest::test]
fn settings_file_drives_registry_construction() {
    let root = TempDir::new().unwrap();
    let lang_dir = root.path().join("translations");
    let config_json = format!(
        r#"{{"languageDirectory": {:?}, "languageCode": "ja_JP"}}"#,
        lang_dir.to_string_lossy()
    );
    fs::write(root.path().join(".mclang-i18n.json"), config_json).unwrap();

    let settings = config::load_from_dir(root.path()).unwrap().unwrap();
    let i18n = LangI18n::from_settings(&settings, Box::new(bundled()));

    expect_that!(i18n.current_language(), some(eq("ja_JP")));
    expect_that!(lang_dir.join("ja_JP.lang").exists(), eq(true));
    expect_that!(
        i18n.translate("motd", &[], DEFAULT_PATTERN),
        eq("\u{3088}\u{3046}\u{3053}\u{305d}!")
    );
}

#[googletest::test]
fn stores_can_be_patched_at_runtime() {
    let dir = TempDir::new().unwrap();
    let mut i18n = LangI18n::new(dir.path(), "en_US", Box::new(bundled()));

    let patch = mclang_i18n::LangData::parse("greeting=Yo, %1$s!\nextra=Patched\n");
    let language = i18n.language_mut("en_US").unwrap();
    language.data_mut().merge_patch(&patch);
    assert_that!(language.write_back(), eq(true));

    let args = vec!["Steve".to_string()];
    expect_that!(i18n.translate("greeting", &args, DEFAULT_PATTERN), eq("Yo, Steve!"));
    expect_that!(i18n.translate("extra", &[], DEFAULT_PATTERN), eq("Patched"));

    // 再構築してもパッチ内容がファイルから復元される
    let reloaded = LangI18n::new(dir.path(), "en_US", Box::new(bundled()));
    expect_that!(reloaded.translate("extra", &[], DEFAULT_PATTERN), eq("Patched"));
}
