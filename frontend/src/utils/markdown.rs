/// The handful of block shapes blog posts are written in.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
  Heading { level: u8, text: String },
  Paragraph(String),
  Bullets(Vec<String>),
  Numbered(Vec<String>),
  Rule,
}

pub fn parse_blocks(source: &str) -> Vec<Block> {
  let mut blocks = Vec::new();
  let mut paragraph: Vec<&str> = Vec::new();

  let flush = |paragraph: &mut Vec<&str>, blocks: &mut Vec<Block>| {
    if !paragraph.is_empty() {
      blocks.push(Block::Paragraph(paragraph.join(" ")));
      paragraph.clear();
    }
  };

  for raw in source.lines() {
    let line = raw.trim();
    if line.is_empty() {
      flush(&mut paragraph, &mut blocks);
      continue;
    }

    if line == "---" {
      flush(&mut paragraph, &mut blocks);
      blocks.push(Block::Rule);
    } else if let Some((level, text)) = heading(line) {
      flush(&mut paragraph, &mut blocks);
      blocks.push(Block::Heading { level, text: text.to_string() });
    } else if let Some(item) = line.strip_prefix("- ") {
      flush(&mut paragraph, &mut blocks);
      match blocks.last_mut() {
        Some(Block::Bullets(items)) => items.push(item.to_string()),
        _ => blocks.push(Block::Bullets(vec![item.to_string()])),
      }
    } else if let Some(item) = numbered_item(line) {
      flush(&mut paragraph, &mut blocks);
      match blocks.last_mut() {
        Some(Block::Numbered(items)) => items.push(item.to_string()),
        _ => blocks.push(Block::Numbered(vec![item.to_string()])),
      }
    } else {
      paragraph.push(line);
    }
  }
  flush(&mut paragraph, &mut blocks);
  blocks
}

fn heading(line: &str) -> Option<(u8, &str)> {
  let level = line.chars().take_while(|c| *c == '#').count();
  if level == 0 || level > 3 {
    return None;
  }
  line[level..].strip_prefix(' ').map(|text| (level as u8, text.trim()))
}

fn numbered_item(line: &str) -> Option<&str> {
  let (num, rest) = line.split_once(". ")?;
  (!num.is_empty() && num.chars().all(|c| c.is_ascii_digit())).then_some(rest)
}

/// Splits `**bold**` runs out of a line; odd entries are emphasised.
pub fn emphasis_runs(text: &str) -> Vec<(bool, &str)> {
  text.split("**")
    .enumerate()
    .filter(|(_, run)| !run.is_empty())
    .map(|(idx, run)| (idx % 2 == 1, run))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn groups_lines_into_blocks() {
    let src = "
# Risk Management

Never risk more than 1-2%
of your account.

## Checklist
- Size the position
- Set the stop
1. Plan
2. Execute
";
    assert_eq!(parse_blocks(src), vec![
      Block::Heading { level: 1, text: "Risk Management".to_string() },
      Block::Paragraph("Never risk more than 1-2% of your account.".to_string()),
      Block::Heading { level: 2, text: "Checklist".to_string() },
      Block::Bullets(vec!["Size the position".to_string(), "Set the stop".to_string()]),
      Block::Numbered(vec!["Plan".to_string(), "Execute".to_string()]),
    ]);
  }

  #[test]
  fn hashtags_and_decimals_stay_in_paragraphs() {
    let blocks = parse_blocks("#1 skill\n2.5 contracts");
    assert_eq!(blocks, vec![Block::Paragraph("#1 skill 2.5 contracts".to_string())]);
  }

  #[test]
  fn dashes_alone_are_a_rule() {
    assert_eq!(parse_blocks("intro\n---\nmore"), vec![
      Block::Paragraph("intro".to_string()),
      Block::Rule,
      Block::Paragraph("more".to_string()),
    ]);
  }

  #[test]
  fn bold_runs_alternate() {
    assert_eq!(emphasis_runs("**Limited Risk**: only fees"), vec![(true, "Limited Risk"), (false, ": only fees")]);
  }
}
