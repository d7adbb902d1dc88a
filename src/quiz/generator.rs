use super::analyzer::{extract_concepts, Concepts};
use rand::seq::SliceRandom;
use rand::Rng;

pub const OPTIONS_PER_QUESTION: usize = 4;
pub const COMPREHENSION_ANSWER_CHARS: usize = 80;
const ASSIGNMENT_TERM_POOL: usize = 3;
const PADDING_OPTIONS: [&str; 2] = ["None of the above", "All of the above"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub answer: String,
}

impl QuizQuestion {
    fn new(question: String, options: [String; OPTIONS_PER_QUESTION], answer: String) -> Self {
        Self {
            question,
            options,
            answer,
        }
    }

    /// Build a question whose first option is the correct one.
    fn answer_first(question: String, answer: String, distractors: [&str; 3]) -> Self {
        let options = [
            answer.clone(),
            distractors[0].to_string(),
            distractors[1].to_string(),
            distractors[2].to_string(),
        ];
        Self::new(question, options, answer)
    }

    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.answer)
    }
}

/// Assignments and quiz produced from one topic and document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    pub topic: String,
    pub concepts: Concepts,
    pub assignments: [String; 2],
    pub questions: [QuizQuestion; 3],
}

pub fn validate_topic(topic: &str) -> Result<&str, String> {
    let topic = topic.trim();
    if topic.is_empty() {
        Err("Please enter a topic!".to_string())
    } else {
        Ok(topic)
    }
}

/// Validate the topic, analyze the document and fill every template.
pub fn generate<R: Rng + ?Sized>(
    topic: &str,
    document: &str,
    rng: &mut R,
) -> Result<GeneratedContent, String> {
    let topic = validate_topic(topic)?;
    let concepts = extract_concepts(document);

    let assignments = generate_assignments(&concepts.sentences, &concepts.key_terms, topic, rng);
    let questions = generate_quiz_questions(&concepts.sentences, &concepts.key_terms, topic, rng);

    Ok(GeneratedContent {
        topic: topic.to_string(),
        concepts,
        assignments,
        questions,
    })
}

pub fn generate_assignments<R: Rng + ?Sized>(
    sentences: &[String],
    key_terms: &[String],
    topic: &str,
    rng: &mut R,
) -> [String; 2] {
    if sentences.is_empty() {
        return [
            format!(
                "Write an essay exploring the key aspects of {}. Include examples and analysis. (300-500 words)",
                topic
            ),
            format!(
                "Critically evaluate the importance of {} in modern context. (250-400 words)",
                topic
            ),
        ];
    }

    let analysis = format!(
        "Explain the main concepts presented in the text about {}. \
         Support your answer with specific examples and reasoning. (300-500 words)",
        topic
    );

    let term = if key_terms.len() >= ASSIGNMENT_TERM_POOL {
        key_terms[..ASSIGNMENT_TERM_POOL].choose(rng)
    } else {
        key_terms.first()
    };

    let critical = match term {
        Some(term) => format!(
            "Discuss the significance of '{}' in the context of {}. \
             How does this concept relate to real-world applications? (250-400 words)",
            term, topic
        ),
        None => format!(
            "Compare and contrast different perspectives or approaches discussed regarding {}. \
             Provide your own critical analysis. (300-500 words)",
            topic
        ),
    };

    [analysis, critical]
}

pub fn generate_quiz_questions<R: Rng + ?Sized>(
    sentences: &[String],
    key_terms: &[String],
    topic: &str,
    rng: &mut R,
) -> [QuizQuestion; 3] {
    [
        concept_question(key_terms, topic, rng),
        comprehension_question(sentences, topic),
        application_question(key_terms, topic),
    ]
}

fn concept_question<R: Rng + ?Sized>(key_terms: &[String], topic: &str, rng: &mut R) -> QuizQuestion {
    if key_terms.len() < OPTIONS_PER_QUESTION {
        return QuizQuestion::answer_first(
            format!("What is the primary focus when studying {}?", topic),
            format!("Understanding core principles of {}", topic),
            [
                "Memorizing dates only",
                "Ignoring practical applications",
                "Avoiding critical analysis",
            ],
        );
    }

    let correct = key_terms[0].clone();
    let mut others: Vec<String> = key_terms[1..]
        .choose_multiple(rng, OPTIONS_PER_QUESTION - 1)
        .cloned()
        .collect();
    for pad in PADDING_OPTIONS {
        if others.len() >= OPTIONS_PER_QUESTION - 1 {
            break;
        }
        others.push(pad.to_string());
    }

    let mut options: [String; OPTIONS_PER_QUESTION] = std::array::from_fn(|i| {
        if i == 0 {
            correct.clone()
        } else {
            others.get(i - 1).cloned().unwrap_or_default()
        }
    });
    options.shuffle(rng);

    QuizQuestion::new(
        format!("Which of the following is a key concept related to {}?", topic),
        options,
        correct,
    )
}

fn comprehension_question(sentences: &[String], topic: &str) -> QuizQuestion {
    if sentences.len() >= 2 {
        return QuizQuestion::answer_first(
            format!(
                "Based on the provided content, which statement best describes {}?",
                topic
            ),
            truncate_with_ellipsis(&sentences[0], COMPREHENSION_ANSWER_CHARS),
            [
                "This topic has no practical relevance",
                "It contradicts all established theories",
                "It requires no further study",
            ],
        );
    }

    QuizQuestion::answer_first(
        format!("What is an important aspect of {}?", topic),
        format!("Analyzing and understanding {} concepts", topic),
        [
            "Ignoring foundational principles",
            "Only memorizing terminology",
            "Dismissing real-world applications",
        ],
    )
}

fn application_question(key_terms: &[String], topic: &str) -> QuizQuestion {
    match key_terms.first() {
        Some(term) => QuizQuestion::answer_first(
            format!("How might understanding '{}' be applied practically?", term),
            format!("By applying {} principles to solve real problems", term),
            [
                "By ignoring its relevance completely",
                "By memorizing it without context",
                "By avoiding its implementation",
            ],
        ),
        None => QuizQuestion::answer_first(
            format!("Why is {} considered important?", topic),
            format!("It provides insights and practical knowledge about {}", topic),
            [
                "It has no significance",
                "It contradicts common sense",
                "It should be ignored",
            ],
        ),
    }
}

/// Keep the first `max_chars` characters, appending `...` when anything was
/// cut.
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_terms() -> Vec<String> {
        strings(&["Photosynthesis", "chlorophyll", "Calvin Cycle", "stroma", "glucose"])
    }

    fn sample_sentences() -> Vec<String> {
        strings(&[
            "Photosynthesis converts light energy into chemical energy stored in glucose molecules inside plant cells",
            "Chlorophyll absorbs mostly red and blue light",
        ])
    }

    fn assert_well_formed(questions: &[QuizQuestion; 3]) {
        for q in questions {
            assert_eq!(q.options.len(), OPTIONS_PER_QUESTION);
            assert!(q.answer_index().is_some(), "answer missing for {:?}", q);
            assert!(!q.question.is_empty());
        }
    }

    #[test]
    fn test_validate_topic() {
        assert_eq!(validate_topic("  Biology "), Ok("Biology"));
        assert_eq!(validate_topic(""), Err("Please enter a topic!".to_string()));
        assert!(validate_topic("   ").is_err());
    }

    #[test]
    fn test_generate_rejects_blank_topic() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(" ", "Some document text that is long enough.", &mut rng).is_err());
    }

    #[test]
    fn test_generate_full_pipeline() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = "Photosynthesis converts light energy into chemical energy. \
                    Plants absorb carbon dioxide through small pores in leaves. \
                    The Calvin Cycle happens in the stroma of chloroplasts.";
        let content = generate("Photosynthesis", text, &mut rng).unwrap();

        assert_eq!(content.topic, "Photosynthesis");
        assert_eq!(content.concepts.sentences.len(), 3);
        assert_well_formed(&content.questions);
        assert!(content.assignments.iter().all(|a| a.contains("Photosynthesis")));
    }

    #[test]
    fn test_assignments_always_two_with_topic() {
        let cases: Vec<(Vec<String>, Vec<String>)> = vec![
            (vec![], vec![]),
            (vec![], sample_terms()),
            (sample_sentences(), vec![]),
            (sample_sentences(), strings(&["chlorophyll"])),
            (sample_sentences(), sample_terms()),
        ];

        let mut rng = StdRng::seed_from_u64(42);
        for (sentences, terms) in cases {
            let assignments = generate_assignments(&sentences, &terms, "Botany", &mut rng);
            assert_eq!(assignments.len(), 2);
            for a in &assignments {
                assert!(!a.is_empty());
                assert!(a.contains("Botany"));
            }
        }
    }

    #[test]
    fn test_assignments_fallback_without_sentences() {
        let mut rng = StepRng::new(0, 1);
        let assignments = generate_assignments(&[], &sample_terms(), "Botany", &mut rng);
        assert!(assignments[0].starts_with("Write an essay exploring the key aspects of Botany."));
        assert!(assignments[1].starts_with("Critically evaluate the importance of Botany"));
    }

    #[test]
    fn test_assignment_term_comes_from_first_three() {
        let terms = sample_terms();
        let mut seen = HashSet::new();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let assignments = generate_assignments(&sample_sentences(), &terms, "Botany", &mut rng);
            let term = terms
                .iter()
                .find(|t| assignments[1].contains(&format!("'{}'", t)))
                .unwrap();
            seen.insert(term.clone());
        }
        let allowed: HashSet<String> = terms[..3].iter().cloned().collect();
        assert!(seen.is_subset(&allowed));
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_assignment_term_with_few_or_no_terms() {
        let mut rng = StdRng::seed_from_u64(3);
        let terms = strings(&["stroma", "glucose"]);
        let assignments = generate_assignments(&sample_sentences(), &terms, "Botany", &mut rng);
        assert!(assignments[1].starts_with("Discuss the significance of 'stroma' in the context of Botany."));

        let assignments = generate_assignments(&sample_sentences(), &[], "Botany", &mut rng);
        assert!(assignments[1].starts_with(
            "Compare and contrast different perspectives or approaches discussed regarding Botany."
        ));
    }

    #[test]
    fn test_questions_well_formed_for_all_inputs() {
        let mut rng = StdRng::seed_from_u64(9);
        for sentences in [vec![], strings(&["Only one sentence that is long enough"]), sample_sentences()] {
            for terms in [vec![], strings(&["stroma"]), sample_terms()] {
                let questions = generate_quiz_questions(&sentences, &terms, "Botany", &mut rng);
                assert_well_formed(&questions);
            }
        }
    }

    #[test]
    fn test_concept_question_uses_terms() {
        let terms = sample_terms();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let questions = generate_quiz_questions(&[], &terms, "Botany", &mut rng);
            let q1 = &questions[0];

            assert_eq!(q1.answer, "Photosynthesis");
            let distinct: HashSet<&String> = q1.options.iter().collect();
            assert_eq!(distinct.len(), OPTIONS_PER_QUESTION);
            assert!(q1.options.iter().all(|o| terms.contains(o)));
        }
    }

    #[test]
    fn test_concept_question_shuffles_answer_position() {
        let terms = sample_terms();
        let positions: HashSet<usize> = (0..40)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                generate_quiz_questions(&[], &terms, "Botany", &mut rng)[0]
                    .answer_index()
                    .unwrap()
            })
            .collect();
        assert!(positions.len() > 1);
    }

    #[test]
    fn test_concept_question_fallback() {
        let mut rng = StepRng::new(0, 1);
        let terms = strings(&["stroma", "glucose", "chlorophyll"]);
        let q1 = &generate_quiz_questions(&[], &terms, "Botany", &mut rng)[0];
        assert_eq!(q1.question, "What is the primary focus when studying Botany?");
        assert_eq!(q1.answer, "Understanding core principles of Botany");
        assert_eq!(q1.answer_index(), Some(0));
    }

    #[test]
    fn test_comprehension_question_truncates_first_sentence() {
        let mut rng = StepRng::new(0, 1);
        let q2 = &generate_quiz_questions(&sample_sentences(), &[], "Botany", &mut rng)[1];

        let expected: String = sample_sentences()[0].chars().take(80).collect::<String>() + "...";
        assert_eq!(q2.answer, expected);
        assert_eq!(q2.options[0], expected);
        assert_eq!(q2.options[1], "This topic has no practical relevance");
    }

    #[test]
    fn test_comprehension_question_keeps_short_sentence() {
        let mut rng = StepRng::new(0, 1);
        let sentences = strings(&["Leaves are green because of chlorophyll", "Roots absorb water from soil"]);
        let q2 = &generate_quiz_questions(&sentences, &[], "Botany", &mut rng)[1];
        assert_eq!(q2.answer, "Leaves are green because of chlorophyll");
    }

    #[test]
    fn test_comprehension_question_fallback_with_one_sentence() {
        let mut rng = StepRng::new(0, 1);
        let sentences = strings(&["Leaves are green because of chlorophyll"]);
        let q2 = &generate_quiz_questions(&sentences, &[], "Botany", &mut rng)[1];
        assert_eq!(q2.answer, "Analyzing and understanding Botany concepts");
    }

    #[test]
    fn test_application_question() {
        let mut rng = StepRng::new(0, 1);
        let q3 = &generate_quiz_questions(&[], &sample_terms(), "Botany", &mut rng)[2];
        assert_eq!(q3.question, "How might understanding 'Photosynthesis' be applied practically?");
        assert_eq!(q3.answer, "By applying Photosynthesis principles to solve real problems");

        let q3 = &generate_quiz_questions(&[], &[], "Botany", &mut rng)[2];
        assert_eq!(q3.question, "Why is Botany considered important?");
        assert_eq!(q3.answer_index(), Some(0));
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);
        let terms = sample_terms();
        let sentences = sample_sentences();

        assert_eq!(
            generate_quiz_questions(&sentences, &terms, "Botany", &mut a),
            generate_quiz_questions(&sentences, &terms, "Botany", &mut b)
        );
        assert_eq!(
            generate_assignments(&sentences, &terms, "Botany", &mut a),
            generate_assignments(&sentences, &terms, "Botany", &mut b)
        );
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 80), "short");
        assert_eq!(truncate_with_ellipsis("abcdef", 3), "abc...");
        assert_eq!(truncate_with_ellipsis("abc", 3), "abc");
        assert_eq!(truncate_with_ellipsis("ééééé", 2), "éé...");
    }
}
