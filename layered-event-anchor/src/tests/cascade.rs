use crate::*;
use layered_timex::{DependencyTree, Token, TokenRange, TreeDisplay};

#[derive(Debug)]
struct Expression;

fn tree(tokens: Vec<Token>) -> DependencyTree {
    DependencyTree::from_tokens(tokens).unwrap()
}

fn event_of(tree: &DependencyTree, span: TokenRange) -> EventAnchor {
    EventAnchorResolver::standard().event(tree, span, &[span])
}

#[test]
fn shallow_sentence() {
    let tree = tree(vec![
        Token::new(0, "3", "3", "NUM", 1, "nummod"),
        Token::new(1, "года", "год", "NOUN", 2, "obl"),
        Token::new(2, "назад", "назад", "ADV", 3, "advmod"),
        Token::new(3, "перенес", "перенести", "VERB", 3, "ROOT"),
        Token::new(4, "инфаркт", "инфаркт", "NOUN", 3, "obj"),
        Token::new(5, ".", ".", "PUNCT", 3, "punct"),
    ]);
    let span = TokenRange::new(0, 3);
    let event = event_of(&tree, span);
    assert_eq!(event.step, Some(AnchorStep::ShallowSentence));

    let display = TreeDisplay::new(&tree)
        .with(span, &Expression)
        .with_tokens(&event.tokens, "event");
    insta::assert_snapshot!(display, @r###"
    3  года  назад  перенес  инфаркт  .
    ╰────────────╯ Expression
                    ╰        ╰event
    "###);
}

#[test]
fn words_hanging_off_the_expression() {
    // "Госпитализирован 3 года назад по поводу инфаркта ."
    let tree = tree(vec![
        Token::new(0, "Госпитализирован", "госпитализировать", "VERB", 0, "ROOT"),
        Token::new(1, "3", "3", "NUM", 2, "nummod"),
        Token::new(2, "года", "год", "NOUN", 3, "obl"),
        Token::new(3, "назад", "назад", "ADV", 0, "advmod"),
        Token::new(4, "по", "по", "ADP", 6, "case"),
        Token::new(5, "поводу", "повод", "ADP", 4, "fixed"),
        Token::new(6, "инфаркта", "инфаркт", "NOUN", 3, "obl"),
        Token::new(7, ".", ".", "PUNCT", 0, "punct"),
    ]);
    let event = event_of(&tree, TokenRange::new(1, 4));
    assert_eq!(event.step, Some(AnchorStep::ExpressionSubtree));
    assert_eq!(event.text(&tree), "инфаркта");
}

#[test]
fn descends_into_the_clause_holding_the_expression() {
    // "Болеет диабетом , получает инсулин с 2010 года ."
    let tree = tree(vec![
        Token::new(0, "Болеет", "болеть", "VERB", 0, "ROOT"),
        Token::new(1, "диабетом", "диабет", "NOUN", 0, "obl"),
        Token::new(2, ",", ",", "PUNCT", 3, "punct"),
        Token::new(3, "получает", "получать", "VERB", 0, "conj"),
        Token::new(4, "инсулин", "инсулин", "NOUN", 3, "obj"),
        Token::new(5, "с", "с", "ADP", 6, "case"),
        Token::new(6, "2010", "2010", "NUM", 3, "obl"),
        Token::new(7, "года", "год", "NOUN", 6, "nmod"),
        Token::new(8, ".", ".", "PUNCT", 0, "punct"),
    ]);
    let span = TokenRange::new(5, 8);
    let event = event_of(&tree, span);
    assert_eq!(event.step, Some(AnchorStep::ShortSentence));
    assert_eq!(event.narrowed, vec![Narrowing::Clause]);
    assert_eq!(event.text(&tree), "получает инсулин");

    let capped = EventAnchorResolver::new(AnchorConfig { max_iterations: 1 });
    assert!(capped.event(&tree, span, &[span]).is_empty());
}

#[test]
fn verbal_complement() {
    // "Пациент с 2015 года начал принимать метформин ."
    let tree = tree(vec![
        Token::new(0, "Пациент", "пациент", "NOUN", 4, "nsubj"),
        Token::new(1, "с", "с", "ADP", 2, "case"),
        Token::new(2, "2015", "2015", "NUM", 4, "obl"),
        Token::new(3, "года", "год", "NOUN", 2, "nmod"),
        Token::new(4, "начал", "начать", "VERB", 4, "ROOT"),
        Token::new(5, "принимать", "принимать", "VERB", 4, "xcomp"),
        Token::new(6, "метформин", "метформин", "NOUN", 5, "obj"),
        Token::new(7, ".", ".", "PUNCT", 4, "punct"),
    ]);
    let event = event_of(&tree, TokenRange::new(1, 4));
    assert_eq!(event.step, Some(AnchorStep::VerbalComplement));
    assert_eq!(event.text(&tree), "начал принимать метформин");
}

#[test]
fn subject_phrase() {
    // "В 2010 году развился острый инфаркт миокарда внезапно ."
    let tree = tree(vec![
        Token::new(0, "В", "в", "ADP", 2, "case"),
        Token::new(1, "2010", "2010", "NUM", 2, "amod"),
        Token::new(2, "году", "год", "NOUN", 3, "obl"),
        Token::new(3, "развился", "развиться", "VERB", 3, "ROOT"),
        Token::new(4, "острый", "острый", "ADJ", 5, "amod"),
        Token::new(5, "инфаркт", "инфаркт", "NOUN", 3, "nsubj"),
        Token::new(6, "миокарда", "миокард", "NOUN", 5, "nmod"),
        Token::new(7, "внезапно", "внезапно", "ADV", 3, "advmod"),
        Token::new(8, ".", ".", "PUNCT", 3, "punct"),
    ]);
    let event = event_of(&tree, TokenRange::new(0, 3));
    assert_eq!(event.step, Some(AnchorStep::Subject));
    assert_eq!(event.text(&tree), "развился острый инфаркт миокарда");
}

#[test]
fn few_branches() {
    // "В 2010 году успешно перенес операцию на сердце ."
    let tree = tree(vec![
        Token::new(0, "В", "в", "ADP", 2, "case"),
        Token::new(1, "2010", "2010", "NUM", 2, "amod"),
        Token::new(2, "году", "год", "NOUN", 4, "obl"),
        Token::new(3, "успешно", "успешно", "ADV", 4, "advmod"),
        Token::new(4, "перенес", "перенести", "VERB", 4, "ROOT"),
        Token::new(5, "операцию", "операция", "NOUN", 4, "obj"),
        Token::new(6, "на", "на", "ADP", 7, "case"),
        Token::new(7, "сердце", "сердце", "NOUN", 5, "nmod"),
        Token::new(8, ".", ".", "PUNCT", 4, "punct"),
    ]);
    let event = event_of(&tree, TokenRange::new(0, 3));
    assert_eq!(event.step, Some(AnchorStep::FewBranches));
    assert_eq!(event.text(&tree), "успешно перенес операцию сердце");
}

#[test]
fn other_expressions_are_excluded() {
    // "С 2010 года болеет , с 2015 года лечит язву ."
    let tree = tree(vec![
        Token::new(0, "С", "с", "ADP", 1, "case"),
        Token::new(1, "2010", "2010", "NUM", 3, "obl"),
        Token::new(2, "года", "год", "NOUN", 1, "nmod"),
        Token::new(3, "болеет", "болеть", "VERB", 3, "ROOT"),
        Token::new(4, ",", ",", "PUNCT", 8, "punct"),
        Token::new(5, "с", "с", "ADP", 6, "case"),
        Token::new(6, "2015", "2015", "NUM", 8, "obl"),
        Token::new(7, "года", "год", "NOUN", 6, "nmod"),
        Token::new(8, "лечит", "лечить", "VERB", 3, "conj"),
        Token::new(9, "язву", "язва", "NOUN", 8, "obj"),
        Token::new(10, ".", ".", "PUNCT", 3, "punct"),
    ]);
    let spans = [TokenRange::new(0, 3), TokenRange::new(5, 8)];
    let resolver = EventAnchorResolver::standard();

    let second = resolver.event(&tree, spans[1], &spans);
    assert_eq!(second.step, Some(AnchorStep::ShortSentence));
    assert_eq!(second.text(&tree), "лечит язву");

    let first = resolver.event(&tree, spans[0], &spans);
    assert_eq!(first.step, Some(AnchorStep::ShallowSentence));
    assert_eq!(first.text(&tree), "болеет лечит язву");
    assert!(!first.tokens.iter().any(|idx| spans[1].contains(*idx)));

    // A lone clause verb at the end is a connective, not an event.
    let alone = PostProcessor::apply(&tree, &[8]);
    assert!(alone.is_empty());
}

#[test]
fn root_and_its_neighbour() {
    // "В 2010 году впервые выявили повышение давления дома ."
    let tree = tree(vec![
        Token::new(0, "В", "в", "ADP", 2, "case"),
        Token::new(1, "2010", "2010", "NUM", 2, "amod"),
        Token::new(2, "году", "год", "NOUN", 4, "obl"),
        Token::new(3, "впервые", "впервые", "ADV", 4, "advmod"),
        Token::new(4, "выявили", "выявить", "VERB", 4, "ROOT"),
        Token::new(5, "повышение", "повышение", "NOUN", 4, "obj"),
        Token::new(6, "давления", "давление", "NOUN", 5, "nmod"),
        Token::new(7, "дома", "дом", "NOUN", 4, "obl"),
        Token::new(8, ".", ".", "PUNCT", 4, "punct"),
    ]);
    let span = TokenRange::new(0, 3);
    let event = event_of(&tree, span);
    assert_eq!(event.step, Some(AnchorStep::RootAndNeighbour));

    let display = TreeDisplay::new(&tree)
        .with(span, &Expression)
        .with_tokens(&event.tokens, "event");
    insta::assert_snapshot!(display, @r###"
    В  2010  году  впервые  выявили  повышение  давления  дома  .
    ╰───────────╯ Expression
                            ╰        ╰          ╰event
    "###);
}

#[test]
fn root_with_a_single_dependent_is_a_shell() {
    // "Отмечается появление одышки с 2015 года ."
    let tree = tree(vec![
        Token::new(0, "Отмечается", "отмечаться", "VERB", 0, "ROOT"),
        Token::new(1, "появление", "появление", "NOUN", 0, "nsubj"),
        Token::new(2, "одышки", "одышка", "NOUN", 1, "nmod"),
        Token::new(3, "с", "с", "ADP", 4, "case"),
        Token::new(4, "2015", "2015", "NUM", 1, "nmod"),
        Token::new(5, "года", "год", "NOUN", 4, "nmod"),
        Token::new(6, ".", ".", "PUNCT", 0, "punct"),
    ]);
    let span = TokenRange::new(3, 6);
    let event = event_of(&tree, span);
    assert_eq!(event.step, Some(AnchorStep::ShallowSentence));
    assert!(event.narrowed.is_empty());

    let display = TreeDisplay::new(&tree)
        .with(span, &Expression)
        .with_tokens(&event.tokens, "event");
    insta::assert_snapshot!(display, @r###"
    Отмечается  появление  одышки  с  2015  года  .
                                   ╰───────────╯ Expression
                ╰          ╰event
    "###);
}

#[test]
fn large_subject_is_searched_on_its_own() {
    // "С 2015 года периодически беспокоят головные боли в затылочной области
    // при резком подъеме давления ."
    let tree = tree(vec![
        Token::new(0, "С", "с", "ADP", 1, "case"),
        Token::new(1, "2015", "2015", "NUM", 4, "obl"),
        Token::new(2, "года", "год", "NOUN", 1, "nmod"),
        Token::new(3, "периодически", "периодически", "ADV", 4, "advmod"),
        Token::new(4, "беспокоят", "беспокоить", "VERB", 4, "ROOT"),
        Token::new(5, "головные", "головной", "ADJ", 6, "amod"),
        Token::new(6, "боли", "боль", "NOUN", 4, "nsubj"),
        Token::new(7, "в", "в", "ADP", 9, "case"),
        Token::new(8, "затылочной", "затылочный", "ADJ", 9, "amod"),
        Token::new(9, "области", "область", "NOUN", 6, "nmod"),
        Token::new(10, "при", "при", "ADP", 12, "case"),
        Token::new(11, "резком", "резкий", "ADJ", 12, "amod"),
        Token::new(12, "подъеме", "подъем", "NOUN", 6, "nmod"),
        Token::new(13, "давления", "давление", "NOUN", 12, "nmod"),
        Token::new(14, ".", ".", "PUNCT", 4, "punct"),
    ]);
    let span = TokenRange::new(0, 3);
    let event = event_of(&tree, span);
    assert_eq!(event.step, Some(AnchorStep::FewBranches));
    assert_eq!(event.narrowed, vec![Narrowing::Subject]);

    let display = TreeDisplay::new(&tree)
        .with(span, &Expression)
        .with_tokens(&event.tokens, "event");
    insta::assert_snapshot!(display, @r###"
    С  2015  года  периодически  беспокоят  головные  боли  в  затылочной  области  при  резком  подъеме  давления  .
    ╰───────────╯ Expression
                                            ╰         ╰        ╰           ╰             ╰       ╰        ╰event
    "###);
}

#[test]
fn search_moves_to_the_head_of_the_expression() {
    // "Повторно экстренно госпитализирован с обострением , начавшимся 3 дня
    // назад , в стационар ."
    let tree = tree(vec![
        Token::new(0, "Повторно", "повторно", "ADV", 2, "advmod"),
        Token::new(1, "экстренно", "экстренно", "ADV", 2, "advmod"),
        Token::new(2, "госпитализирован", "госпитализировать", "VERB", 2, "ROOT"),
        Token::new(3, "с", "с", "ADP", 4, "case"),
        Token::new(4, "обострением", "обострение", "NOUN", 2, "obl"),
        Token::new(5, ",", ",", "PUNCT", 6, "punct"),
        Token::new(6, "начавшимся", "начаться", "VERB", 4, "acl"),
        Token::new(7, "3", "3", "NUM", 8, "nummod"),
        Token::new(8, "дня", "день", "NOUN", 9, "obl"),
        Token::new(9, "назад", "назад", "ADV", 6, "advmod"),
        Token::new(10, ",", ",", "PUNCT", 6, "punct"),
        Token::new(11, "в", "в", "ADP", 12, "case"),
        Token::new(12, "стационар", "стационар", "NOUN", 2, "obl"),
        Token::new(13, ".", ".", "PUNCT", 2, "punct"),
    ]);
    let span = TokenRange::new(7, 10);
    let event = event_of(&tree, span);
    assert_eq!(event.step, Some(AnchorStep::ShallowSentence));
    assert_eq!(event.narrowed, vec![Narrowing::ExpressionHead]);

    let display = TreeDisplay::new(&tree)
        .with(span, &Expression)
        .with_tokens(&event.tokens, "event");
    insta::assert_snapshot!(display, @r###"
    Повторно  экстренно  госпитализирован  с  обострением  ,  начавшимся  3  дня  назад  ,  в  стационар  .
                                                                          ╰───────────╯ Expression
                                                              ╰event
    "###);

    // One round is not enough to follow the move.
    let capped = EventAnchorResolver::new(AnchorConfig { max_iterations: 1 });
    assert!(capped.event(&tree, span, &[span]).is_empty());
}
