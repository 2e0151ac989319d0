// ============================================
// L-System Symbols - Классификация символов
// ============================================
// Строки правил разбираются в Symbol один раз; при исполнении
// черепаха работает только с вариантами enum.

use crate::treegen::definition::RuleSlot;

/// Локальная ось черепахи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnAxis {
    /// Вокруг локальной X (направление движения)
    Roll,
    /// Вокруг локальной Y
    Pitch,
    /// Вокруг локальной Z
    Yaw,
}

/// Что делает шаг вперёд
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stroke {
    /// `G` - перо поднято
    Move,
    /// `T` - ствол
    Trunk,
    /// `F` - ствол/ветка
    Branch,
    /// `f` - лист
    Leaf,
    /// `R` - плод
    Fruit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `A`-`D`: всегда переписывается правилом
    Rewrite(RuleSlot),
    /// `a`-`d`: переписывается с шансом слота, иначе исчезает
    MaybeRewrite(RuleSlot),
    Forward(Stroke),
    Turn { axis: TurnAxis, positive: bool },
    /// `[`
    Push,
    /// `]`
    Pop,
    /// Неизвестный символ, при исполнении ничего не делает
    Other(char),
}

impl Symbol {
    pub fn parse(c: char) -> Self {
        match c {
            'A' => Symbol::Rewrite(RuleSlot::A),
            'B' => Symbol::Rewrite(RuleSlot::B),
            'C' => Symbol::Rewrite(RuleSlot::C),
            'D' => Symbol::Rewrite(RuleSlot::D),
            'a' => Symbol::MaybeRewrite(RuleSlot::A),
            'b' => Symbol::MaybeRewrite(RuleSlot::B),
            'c' => Symbol::MaybeRewrite(RuleSlot::C),
            'd' => Symbol::MaybeRewrite(RuleSlot::D),
            'G' => Symbol::Forward(Stroke::Move),
            'T' => Symbol::Forward(Stroke::Trunk),
            'F' => Symbol::Forward(Stroke::Branch),
            'f' => Symbol::Forward(Stroke::Leaf),
            'R' => Symbol::Forward(Stroke::Fruit),
            '+' => Symbol::Turn { axis: TurnAxis::Yaw, positive: true },
            '-' => Symbol::Turn { axis: TurnAxis::Yaw, positive: false },
            '&' => Symbol::Turn { axis: TurnAxis::Pitch, positive: true },
            '^' => Symbol::Turn { axis: TurnAxis::Pitch, positive: false },
            '*' => Symbol::Turn { axis: TurnAxis::Roll, positive: true },
            '/' => Symbol::Turn { axis: TurnAxis::Roll, positive: false },
            '[' => Symbol::Push,
            ']' => Symbol::Pop,
            other => Symbol::Other(other),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::Rewrite(slot) => ['A', 'B', 'C', 'D'][slot.index()],
            Symbol::MaybeRewrite(slot) => ['a', 'b', 'c', 'd'][slot.index()],
            Symbol::Forward(Stroke::Move) => 'G',
            Symbol::Forward(Stroke::Trunk) => 'T',
            Symbol::Forward(Stroke::Branch) => 'F',
            Symbol::Forward(Stroke::Leaf) => 'f',
            Symbol::Forward(Stroke::Fruit) => 'R',
            Symbol::Turn { axis: TurnAxis::Yaw, positive } => if positive { '+' } else { '-' },
            Symbol::Turn { axis: TurnAxis::Pitch, positive } => if positive { '&' } else { '^' },
            Symbol::Turn { axis: TurnAxis::Roll, positive } => if positive { '*' } else { '/' },
            Symbol::Push => '[',
            Symbol::Pop => ']',
            Symbol::Other(c) => c,
        }
    }
}

pub fn parse_symbols(s: &str) -> Vec<Symbol> {
    s.chars().map(Symbol::parse).collect()
}

pub fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.to_char()).collect()
}
