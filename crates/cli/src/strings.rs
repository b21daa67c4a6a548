// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Language bundles for the presentation layer
//!
//! The simulation core never reads these. The renderer looks every label
//! up through a bundle picked by language tag, so swapping languages is
//! swapping a static table.

use vapor_core::display::StackStatus;

/// Language tag selecting a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Lang {
    En,
    Ja,
}

/// One entry on the plan card
pub struct StackItem {
    pub name: &'static str,
    pub tech: &'static str,
}

/// Every label the renderer prints
pub struct Strings {
    // Voting stage
    pub voting_title: &'static str,
    pub voting_subtitle: &'static str,
    pub business_name: &'static str,
    pub business_pitch: &'static str,
    pub keywords: [&'static str; 5],
    pub consensus_label: &'static str,
    pub consensus_achieved: &'static str,

    // Approved stage
    pub approved_title: &'static str,
    pub approved_subtitle: &'static str,
    pub configuring: &'static str,

    // Planning stage
    pub planning_title: &'static str,
    pub stack_title: &'static str,
    pub steps_title: &'static str,
    pub budget_label: &'static str,

    // Building stage
    pub building_title: &'static str,
    pub countdown_label: &'static str,
    pub step_label: &'static str,
    pub status_completed: &'static str,
    pub status_in_progress: &'static str,
    pub status_pending: &'static str,

    // Complete stage
    pub complete_title: &'static str,
    pub complete_subtitle: &'static str,
    pub synthesis_label: &'static str,
    pub elapsed_label: &'static str,
    pub modules_label: &'static str,
    pub new_venture_hint: &'static str,

    // Rotating build content
    pub process_messages: [&'static str; 7],
    pub development_steps: [&'static str; 7],
    pub tech_stack: [StackItem; 6],
}

impl Strings {
    pub fn stack_status_label(&self, status: StackStatus) -> &'static str {
        match status {
            StackStatus::Completed => self.status_completed,
            StackStatus::InProgress => self.status_in_progress,
            StackStatus::Pending => self.status_pending,
        }
    }
}

/// Look up the bundle for a language tag
pub fn bundle(lang: Lang) -> &'static Strings {
    match lang {
        Lang::En => &EN,
        Lang::Ja => &JA,
    }
}

static EN: Strings = Strings {
    voting_title: "CONSENSUS CHAMBER",
    voting_subtitle: "Synthetic stakeholders evaluating tonight's venture",
    business_name: "AI Health Copilot",
    business_pitch: "Reads personal health data and serves tailored advice nobody asked for",
    keywords: ["Health", "AI", "Personalization", "Data", "Wellness"],
    consensus_label: "consensus",
    consensus_achieved: "CONSENSUS ACHIEVED",

    approved_title: "PROJECT APPROVED",
    approved_subtitle: "Design agents standing by",
    configuring: "configuring neural pathways...",

    planning_title: "DEVELOPMENT MATRIX",
    stack_title: "tech stack",
    steps_title: "execution plan",
    budget_label: "allotted build time",

    building_title: "SYNTHESIS ACTIVE",
    countdown_label: "to launch",
    step_label: "step",
    status_completed: "ONLINE",
    status_in_progress: "SYNCING",
    status_pending: "STANDBY",

    complete_title: "LAUNCH COMPLETE",
    complete_subtitle: "The machine claims it has built your company",
    synthesis_label: "synthesis",
    elapsed_label: "build time",
    modules_label: "modules",
    new_venture_hint: "run again for a fresh venture",

    process_messages: [
        "Priming quantum matrices...",
        "Sketching neural interface patterns...",
        "Laying out data structures...",
        "Wiring API pathways...",
        "Folding in the AI consciousness...",
        "Running quantum test suites...",
        "Staging the neural deployment...",
    ],
    development_steps: [
        "Project scaffold",
        "Interface generation",
        "Database design",
        "API build-out",
        "Model integration",
        "Test pass",
        "Launch prep",
    ],
    tech_stack: [
        StackItem {
            name: "Frontend",
            tech: "React Native",
        },
        StackItem {
            name: "Backend",
            tech: "Node.js + Express",
        },
        StackItem {
            name: "Database",
            tech: "MongoDB",
        },
        StackItem {
            name: "AI/ML",
            tech: "TensorFlow.js",
        },
        StackItem {
            name: "Auth",
            tech: "Firebase Auth",
        },
        StackItem {
            name: "Cloud",
            tech: "AWS",
        },
    ],
};

static JA: Strings = Strings {
    voting_title: "コンセンサス・チェンバー",
    voting_subtitle: "仮想ステークホルダーが今夜の事業案を審査中",
    business_name: "AIヘルスコパイロット",
    business_pitch: "個人の健康データを読み取り、頼まれていない助言を届けるアプリ",
    keywords: ["健康", "AI", "パーソナライズ", "データ", "ウェルネス"],
    consensus_label: "合意",
    consensus_achieved: "合意形成完了",

    approved_title: "プロジェクト承認",
    approved_subtitle: "デザインエージェント待機中",
    configuring: "ニューラル経路を構成中...",

    planning_title: "開発マトリクス",
    stack_title: "技術スタック",
    steps_title: "実行計画",
    budget_label: "開発予定時間",

    building_title: "シンセシス進行中",
    countdown_label: "ローンチまで",
    step_label: "ステップ",
    status_completed: "稼働中",
    status_in_progress: "同期中",
    status_pending: "待機",

    complete_title: "ローンチ完了",
    complete_subtitle: "マシンいわく、あなたの会社は完成しました",
    synthesis_label: "シンセシス",
    elapsed_label: "開発時間",
    modules_label: "モジュール",
    new_venture_hint: "もう一度実行すると新しいベンチャーが始まります",

    process_messages: [
        "量子マトリクスを初期化中...",
        "ニューラルUIパターンを生成中...",
        "データ構造を設計中...",
        "API経路を接続中...",
        "AIの意識を統合中...",
        "量子テストを実行中...",
        "デプロイを準備中...",
    ],
    development_steps: [
        "プロジェクト初期化",
        "UI生成",
        "データベース設計",
        "API開発",
        "モデル統合",
        "テスト実装",
        "ローンチ準備",
    ],
    tech_stack: [
        StackItem {
            name: "フロントエンド",
            tech: "React Native",
        },
        StackItem {
            name: "バックエンド",
            tech: "Node.js + Express",
        },
        StackItem {
            name: "データベース",
            tech: "MongoDB",
        },
        StackItem {
            name: "AI/ML",
            tech: "TensorFlow.js",
        },
        StackItem {
            name: "認証",
            tech: "Firebase Auth",
        },
        StackItem {
            name: "クラウド",
            tech: "AWS",
        },
    ],
};
