use crunch_compactor::{audit, Compactor, LineMinifier};
use crunch_core::{BuildConfig, ConstantTable, ExclusionSet};

const GAME: &str = r#"
var canvas = document.getElementById('c');
var context = canvas.getContext('2d');
var player = { positionX: WIDTH / 2, positionY: HEIGHT / 2, velocity: 0 };

function updatePlayer(player, elapsed) {
    player.positionX += player.velocity * elapsed;
    if (DEBUG) { console.log('player', player.positionX); }
}

function renderPlayer(context, player) {
    context.fillStyle = COLOR;
    context.fillRect(player.positionX, player.positionY, 8, 8);
}
"#;

fn constants() -> ConstantTable {
    ConstantTable::new()
        .with("WIDTH", 320)
        .unwrap()
        .with("HEIGHT", 240)
        .unwrap()
        .with("DEBUG", false)
        .unwrap()
        .with("COLOR", "#fff")
        .unwrap()
}

#[test]
fn test_debug_build_only_substitutes() {
    let out = Compactor::new().compact(GAME, &constants(), false).unwrap();
    assert!(out.contains("positionX: 320 / 2"));
    assert!(out.contains("if (false)"));
    assert!(out.contains("context.fillStyle = \"#fff\";"));
    assert!(out.contains("updatePlayer"));
}

#[test]
fn test_minified_build_shrinks_and_keeps_reserved_words() {
    let compactor = Compactor::new()
        .with_exclusions(ExclusionSet::javascript())
        .with_minifier(LineMinifier);
    let report = compactor.compact_with_report(GAME, &constants(), true).unwrap();
    let out = &report.output;

    assert!(out.len() < GAME.len());
    assert!(report.mangled_len < report.substituted_len);
    for kept in ["function", "document", "getElementById", "fillRect", "console"] {
        assert!(out.contains(kept), "{kept} missing from {out}");
    }
    for gone in ["updatePlayer", "renderPlayer", "positionX", "velocity", "elapsed"] {
        assert!(!out.contains(gone), "{gone} still in {out}");
    }
    let map = report.mangle_map.unwrap();
    assert!(map.iter().all(|(token, code)| code.len() < token.len()));
}

#[test]
fn test_config_driven_build() {
    let config = BuildConfig::from_json(
        r##"{
            "constants": {"WIDTH": 320, "HEIGHT": 240, "DEBUG": false, "COLOR": "#fff"},
            "exclude": {"preset": "javascript", "words": ["renderPlayer"]}
        }"##,
    )
    .unwrap();
    let table = config.constant_table().unwrap();
    let out = Compactor::from_config(&config).compact(GAME, &table, true).unwrap();
    assert!(out.contains("renderPlayer"));
    assert!(!out.contains("updatePlayer"));
    assert!(!out.contains("WIDTH"));
}

#[test]
fn test_audit_of_written_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("compact.js");
    let out = Compactor::new()
        .with_exclusions(ExclusionSet::javascript())
        .compact(GAME, &constants(), true)
        .unwrap();
    std::fs::write(&path, &out).unwrap();

    let report = audit::audit_file(&path, audit::DEFAULT_MAX_BYTES).unwrap();
    assert_eq!(report.size, out.len() as u64);
    assert!(!report.is_over());
    let tight = audit::audit_file(&path, 10).unwrap();
    assert!(tight.is_over());
    assert!(tight.to_string().ends_with("bytes over)"));
}
