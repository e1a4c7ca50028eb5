use serde::{Deserialize, Serialize};

/// Closed set of level categories and their on-disk directory names.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelCategory {
    Missions,
    FreeGame,
    Exercises,
    Challenges,
    Custom,
    Perso,
    Win,
    Lost,
}

impl LevelCategory {
    pub fn dir_name(&self) -> &'static str {
        match self {
            LevelCategory::Missions => "missions",
            LevelCategory::FreeGame => "free",
            LevelCategory::Exercises => "exercises",
            LevelCategory::Challenges => "challenges",
            LevelCategory::Custom => "custom",
            LevelCategory::Perso => "perso",
            LevelCategory::Win => "win",
            LevelCategory::Lost => "lost",
        }
    }
}

/// Source of on-disk directory names for user-authored levels,
/// keyed by chapter index.
pub trait CustomLevelSource {
    fn custom_level_dir(&self, chapter: u32) -> String;
}

impl<T: AsRef<str>> CustomLevelSource for [T] {
    fn custom_level_dir(&self, chapter: u32) -> String {
        self.get(chapter as usize)
            .map(|s| s.as_ref().to_string())
            .unwrap_or_default()
    }
}

pub fn build_category_path(category: &str) -> String {
    if category == "perso" || category == "win" || category == "lost" {
        "levels/other/".to_string()
    } else {
        format!("levels/{}/", category)
    }
}

/// Builds the relative path of a scene file (or its containing directory
/// when `scene_file` is false) for a category/chapter/rank triple.
///
/// Chapter and rank limits for the single-file categories are caller
/// contracts, not data errors: `perso` takes no chapter or rank, and
/// `win`/`lost` take no chapter.
pub fn build_scene_path<C: CustomLevelSource + ?Sized>(
    category: &str,
    chapter: u32,
    rank: u32,
    scene_file: bool,
    custom_levels: &C,
) -> String {
    let mut path = build_category_path(category);
    if category == "custom" {
        path.push_str(&custom_levels.custom_level_dir(chapter));
        path.push_str(&rank_leaf(rank, scene_file));
    } else if category == "perso" {
        assert!(chapter == 0);
        assert!(rank == 0);
        path.push_str("perso.txt");
    } else if category == "win" || category == "lost" {
        assert!(chapter == 0);
        path.push_str(&format!("{}{:03}.txt", category, rank));
    } else {
        path.push_str(&format!("chapter{:03}", chapter));
        path.push_str(&rank_leaf(rank, scene_file));
    }
    path
}

pub fn build_scene_path_for<C: CustomLevelSource + ?Sized>(
    category: LevelCategory,
    chapter: u32,
    rank: u32,
    scene_file: bool,
    custom_levels: &C,
) -> String {
    build_scene_path(category.dir_name(), chapter, rank, scene_file, custom_levels)
}

// Rank 0 is the chapter itself; nonzero ranks are levels within it.
fn rank_leaf(rank: u32, scene_file: bool) -> String {
    if rank == 0 {
        if scene_file {
            "/chaptertitle.txt".to_string()
        } else {
            String::new()
        }
    } else if scene_file {
        format!("/level{:03}/scene.txt", rank)
    } else {
        format!("/level{:03}", rank)
    }
}
