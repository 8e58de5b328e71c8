//! The question bank: categories of question records.
//!
//! A bank is read-only after construction. The built-in sample bank makes
//! the tool usable out of the box; real banks are loaded from TOML files
//! via [`crate::parser`].

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Answer, Difficulty, Question, QuestionType};

/// A collection of questions grouped by category.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    categories: BTreeMap<String, Vec<Question>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add questions under a category, appending if the category exists.
    pub fn insert(&mut self, category: impl Into<String>, questions: Vec<Question>) {
        self.categories
            .entry(category.into())
            .or_default()
            .extend(questions);
    }

    /// Merge another bank into this one, appending per category.
    pub fn merge(&mut self, other: QuestionBank) {
        for (category, questions) in other.categories {
            self.insert(category, questions);
        }
    }

    /// Iterate over every question in every category.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.categories.values().flatten()
    }

    /// Category names in the bank.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// All distinct module tags in the bank.
    pub fn module_tags(&self) -> BTreeSet<&str> {
        self.questions().map(|q| q.module.as_str()).collect()
    }

    /// Total question count across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The built-in sample bank covering the default training modules.
    pub fn builtin() -> Self {
        let mut bank = QuestionBank::new();

        bank.insert(
            "architecture",
            vec![
                multiple_choice(
                    "arch_001",
                    "What is the maximum number of hosts supported in a single compute cluster?",
                    &["32", "64", "96", "128"],
                    "64",
                    "Current platform releases support up to 64 hosts per cluster.",
                    Difficulty::Medium,
                    "introduction",
                ),
                true_false(
                    "arch_002",
                    "A TPM 2.0 chip is required to enable secure boot on a host.",
                    true,
                    "Secure boot attestation relies on TPM 2.0 measurements.",
                    Difficulty::Easy,
                    "security",
                ),
                multiple_choice(
                    "arch_003",
                    "Which component maintains the authoritative inventory of hosts and virtual machines?",
                    &["The hypervisor kernel", "The management server", "The witness node", "The distributed switch"],
                    "The management server",
                    "Hosts report into the central management server, which owns the inventory.",
                    Difficulty::Easy,
                    "introduction",
                ),
                essay(
                    "arch_004",
                    "Explain the trade-offs between scale-up and scale-out cluster designs for a virtualization platform.",
                    "Expected points: failure domain size, licensing, maintenance windows, resource fragmentation.",
                    Difficulty::Hard,
                    "introduction",
                ),
            ],
        );

        bank.insert(
            "deployment",
            vec![
                short_answer(
                    "dep_001",
                    "Which file format is used to describe an unattended host installation?",
                    "kickstart script",
                    "Unattended installs are driven by a kickstart script.",
                    Difficulty::Medium,
                    "deployment",
                ),
                multiple_choice(
                    "dep_002",
                    "Which deployment method installs hosts over the network without local media?",
                    &["Interactive install", "Scripted USB install", "Network boot (PXE) install", "Image clone"],
                    "Network boot (PXE) install",
                    "PXE boot pulls the installer image over the network.",
                    Difficulty::Easy,
                    "deployment",
                ),
                true_false(
                    "dep_003",
                    "A host can join a cluster before its management network is configured.",
                    false,
                    "Cluster membership requires a reachable management interface.",
                    Difficulty::Medium,
                    "deployment",
                ),
                scenario(
                    "dep_004",
                    "You must roll out 40 identical hosts across two sites with minimal manual effort. Describe your deployment plan, including image management and validation steps.",
                    "Expected: golden image, PXE/scripted install, host profiles, post-install compliance checks.",
                    Difficulty::Hard,
                    "deployment",
                ),
            ],
        );

        bank.insert(
            "storage",
            vec![
                multiple_choice(
                    "stor_001",
                    "Which storage protocol provides the lowest latency for hyperconverged storage?",
                    &["iSCSI", "NFS", "NVMe over Fabrics", "Fibre Channel"],
                    "NVMe over Fabrics",
                    "NVMe over Fabrics has the lowest protocol overhead of the listed options.",
                    Difficulty::Hard,
                    "storage-management",
                ),
                true_false(
                    "stor_002",
                    "Thin-provisioned disks consume their full capacity at creation time.",
                    false,
                    "Thin disks grow on demand; thick disks reserve capacity up front.",
                    Difficulty::Easy,
                    "storage-management",
                ),
                short_answer(
                    "stor_003",
                    "Name the mechanism that migrates a running virtual machine's disks between datastores.",
                    "live storage migration",
                    "Live storage migration relocates disks without downtime.",
                    Difficulty::Medium,
                    "storage-management",
                ),
            ],
        );

        bank.insert(
            "networking",
            vec![
                short_answer(
                    "net_001",
                    "What command-line tool configures NTP servers on a host?",
                    "the host CLI ntp set command",
                    "Time sync is configured through the host CLI's ntp subcommands.",
                    Difficulty::Medium,
                    "networking",
                ),
                multiple_choice(
                    "net_002",
                    "Which construct spans multiple hosts with a single switching configuration?",
                    &["Standard switch", "Distributed switch", "Loopback bridge", "Host uplink group"],
                    "Distributed switch",
                    "A distributed switch is defined once and pushed to every member host.",
                    Difficulty::Easy,
                    "networking",
                ),
                true_false(
                    "net_003",
                    "Jumbo frames must be enabled end-to-end to be effective.",
                    true,
                    "A single 1500-byte hop forces fragmentation and negates the benefit.",
                    Difficulty::Medium,
                    "networking",
                ),
            ],
        );

        bank.insert(
            "security",
            vec![
                multiple_choice(
                    "sec_001",
                    "Which mode blocks all inbound services on a host except explicitly allowed ones?",
                    &["Audit mode", "Lockdown mode", "Maintenance mode", "Quarantine mode"],
                    "Lockdown mode",
                    "Lockdown mode restricts direct host access to the management plane.",
                    Difficulty::Medium,
                    "security",
                ),
                true_false(
                    "sec_002",
                    "Virtual machine encryption requires a key provider to be configured first.",
                    true,
                    "Encryption keys are issued by an external or native key provider.",
                    Difficulty::Easy,
                    "security",
                ),
                essay(
                    "sec_003",
                    "Describe a defense-in-depth strategy for the management network of a virtualization platform.",
                    "Expected: network isolation, MFA, certificate management, audit logging, patching cadence.",
                    Difficulty::Hard,
                    "security",
                ),
            ],
        );

        bank
    }
}

fn multiple_choice(
    id: &str,
    prompt: &str,
    options: &[&str],
    correct: &str,
    explanation: &str,
    difficulty: Difficulty,
    module: &str,
) -> Question {
    Question {
        id: id.into(),
        question_type: QuestionType::MultipleChoice,
        prompt: prompt.into(),
        options: Some(options.iter().map(|o| o.to_string()).collect()),
        correct_answer: Answer::Text(correct.into()),
        explanation: explanation.into(),
        difficulty,
        module: module.into(),
    }
}

fn true_false(
    id: &str,
    prompt: &str,
    correct: bool,
    explanation: &str,
    difficulty: Difficulty,
    module: &str,
) -> Question {
    Question {
        id: id.into(),
        question_type: QuestionType::TrueFalse,
        prompt: prompt.into(),
        options: None,
        correct_answer: Answer::Bool(correct),
        explanation: explanation.into(),
        difficulty,
        module: module.into(),
    }
}

fn short_answer(
    id: &str,
    prompt: &str,
    correct: &str,
    explanation: &str,
    difficulty: Difficulty,
    module: &str,
) -> Question {
    Question {
        id: id.into(),
        question_type: QuestionType::ShortAnswer,
        prompt: prompt.into(),
        options: None,
        correct_answer: Answer::Text(correct.into()),
        explanation: explanation.into(),
        difficulty,
        module: module.into(),
    }
}

fn essay(
    id: &str,
    prompt: &str,
    explanation: &str,
    difficulty: Difficulty,
    module: &str,
) -> Question {
    Question {
        id: id.into(),
        question_type: QuestionType::Essay,
        prompt: prompt.into(),
        options: None,
        correct_answer: Answer::Text("See grading notes".into()),
        explanation: explanation.into(),
        difficulty,
        module: module.into(),
    }
}

fn scenario(
    id: &str,
    prompt: &str,
    explanation: &str,
    difficulty: Difficulty,
    module: &str,
) -> Question {
    Question {
        id: id.into(),
        question_type: QuestionType::Scenario,
        prompt: prompt.into(),
        options: None,
        correct_answer: Answer::Text("See grading notes".into()),
        explanation: explanation.into(),
        difficulty,
        module: module.into(),
    }
}
