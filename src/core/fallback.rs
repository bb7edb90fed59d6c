//! Offline template generator.
//!
//! Classifies the raw input into a [`Bucket`] by keyword and renders a fixed
//! structured prompt for it with the input placed verbatim under the first
//! section. Used when a failure degrades, and by `--offline`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Writing,
    Coding,
    Analysis,
    Creative,
    General,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Bucket::Writing => "writing",
            Bucket::Coding => "coding",
            Bucket::Analysis => "analysis",
            Bucket::Creative => "creative",
            Bucket::General => "general",
        };
        f.write_str(label)
    }
}

/// Evaluated top to bottom, first match wins. Inputs matching nothing land in
/// [`Bucket::General`].
pub const BUCKET_RULES: &[(Bucket, &[&str])] = &[
    (Bucket::Writing, &["写", "文章", "内容"]),
    (Bucket::Coding, &["代码", "编程", "开发"]),
    (Bucket::Analysis, &["分析", "研究", "调查"]),
    (Bucket::Creative, &["创意", "设计", "想法"]),
];

struct Template {
    title: &'static str,
    slot_heading: &'static str,
    body: &'static str,
}

const WRITING: Template = Template {
    title: "写作任务增强提示词",
    slot_heading: "核心任务",
    body: "## 写作要求
1. **结构清晰**: 使用合适的标题层级和段落结构
2. **内容充实**: 提供具体的事实、数据和例子支撑观点
3. **语言流畅**: 使用准确、生动的语言表达
4. **逻辑严密**: 确保论证过程清晰，前后呼应

## 输出格式
- 标题：简洁有力，概括主题
- 引言：吸引读者注意，概述主要内容
- 正文：分段论述，每段一个要点
- 结论：总结要点，呼应主题

## 质量标准
- 字数适中，内容饱满
- 观点明确，论证有力
- 语言规范，表达准确
- 结构完整，逻辑清晰

请按照以上要求完成写作任务。",
};

const CODING: Template = Template {
    title: "编程任务增强提示词",
    slot_heading: "开发需求",
    body: "## 技术要求
1. **代码质量**: 遵循最佳实践和编码规范
2. **功能完整**: 实现所有必要的功能模块
3. **错误处理**: 包含适当的异常处理机制
4. **性能优化**: 考虑代码执行效率和资源使用

## 实现规范
- 使用清晰的变量和函数命名
- 添加必要的注释说明
- 遵循DRY原则，避免代码重复
- 考虑代码的可维护性和扩展性

## 输出要求
- 提供完整的代码实现
- 包含使用示例和测试用例
- 说明关键技术点和实现思路
- 列出可能的改进方向

## 质量检查
- 语法正确，无明显错误
- 逻辑清晰，功能完整
- 性能合理，资源高效
- 文档完善，易于理解

请按照以上标准完成编程任务。",
};

const ANALYSIS: Template = Template {
    title: "分析任务增强提示词",
    slot_heading: "分析目标",
    body: "## 分析框架
1. **问题定义**: 明确分析的核心问题和范围
2. **数据收集**: 识别相关数据源和信息来源
3. **方法选择**: 选择合适的分析方法和工具
4. **结果解读**: 客观解释分析结果和含义

## 分析维度
- **定量分析**: 使用数据和统计方法
- **定性分析**: 考虑背景因素和主观判断
- **对比分析**: 横向和纵向比较
- **趋势分析**: 识别发展趋势和变化规律

## 输出结构
- 执行摘要：核心发现和建议
- 背景介绍：问题背景和分析目的
- 方法说明：分析方法和数据来源
- 结果展示：详细分析结果
- 结论建议：基于分析的结论和建议

## 质量要求
- 逻辑严密，论证充分
- 数据准确，来源可靠
- 结论客观，建议实用
- 表达清晰，易于理解

请按照以上框架进行深入分析。",
};

const CREATIVE: Template = Template {
    title: "创意任务增强提示词",
    slot_heading: "创意需求",
    body: "## 创意原则
1. **原创性**: 提供独特新颖的想法和方案
2. **实用性**: 确保创意具有可行性和实用价值
3. **创新性**: 突破常规思维，探索新的可能性
4. **针对性**: 紧密结合具体需求和目标受众

## 思维方法
- **发散思维**: 从多个角度探索可能性
- **联想思维**: 建立不同概念间的联系
- **逆向思维**: 从相反角度思考问题
- **系统思维**: 考虑整体和各部分的关系

## 输出要求
- 提供多个创意方案供选择
- 详细描述每个方案的特点
- 分析方案的优势和挑战
- 给出实施建议和注意事项

## 评估标准
- 创新程度：是否具有新颖性
- 可行性：是否容易实现
- 影响力：是否能产生预期效果
- 持续性：是否具有长期价值

请发挥创意，提供多样化的解决方案。",
};

const GENERAL: Template = Template {
    title: "通用任务增强提示词",
    slot_heading: "任务描述",
    body: "## 执行标准
1. **准确性**: 确保信息准确，避免错误和误导
2. **完整性**: 全面覆盖相关要点，不遗漏重要内容
3. **清晰性**: 表达清楚明了，易于理解和执行
4. **实用性**: 提供具有实际价值的内容和建议

## 工作流程
- **需求分析**: 深入理解任务要求和期望
- **资料收集**: 搜集相关信息和参考资料
- **内容组织**: 合理安排内容结构和逻辑
- **质量检查**: 确保输出质量符合标准

## 输出格式
- 使用清晰的标题和段落结构
- 采用适当的格式化和排版
- 包含必要的说明和注释
- 提供相关的参考和延伸阅读

## 质量保证
- 内容准确，逻辑清晰
- 结构完整，重点突出
- 语言规范，表达准确
- 格式统一，便于阅读

请按照以上要求高质量完成任务。",
};

impl Bucket {
    fn template(self) -> &'static Template {
        match self {
            Bucket::Writing => &WRITING,
            Bucket::Coding => &CODING,
            Bucket::Analysis => &ANALYSIS,
            Bucket::Creative => &CREATIVE,
            Bucket::General => &GENERAL,
        }
    }

    /// Top-level heading of the rendered template, including the `# ` marker.
    pub fn heading(self) -> String {
        format!("# {}", self.template().title)
    }
}

pub fn classify_bucket(input: &str) -> Bucket {
    let lowered = input.to_lowercase();
    BUCKET_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(bucket, _)| *bucket)
        .unwrap_or(Bucket::General)
}

pub fn render(bucket: Bucket, input: &str) -> String {
    let template = bucket.template();
    format!(
        "# {}\n\n## {}\n{}\n\n{}",
        template.title, template.slot_heading, input, template.body
    )
}

pub fn fallback(input: &str) -> String {
    let bucket = classify_bucket(input);
    tracing::debug!("Rendering fallback template for bucket: {}", bucket);
    render(bucket, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writing_scenario() {
        let input = "我想写一篇关于气候变化的文章";
        assert_eq!(classify_bucket(input), Bucket::Writing);

        let output = fallback(input);
        assert!(output.starts_with("# 写作任务增强提示词"));
        assert!(output.contains(input));
    }

    #[test]
    fn test_writing_wins_over_coding() {
        assert_eq!(classify_bucket("帮我写个Python代码"), Bucket::Writing);
    }

    #[test]
    fn test_each_bucket_is_reachable() {
        assert_eq!(classify_bucket("整理一下这段内容"), Bucket::Writing);
        assert_eq!(classify_bucket("用Rust编程实现一个队列"), Bucket::Coding);
        assert_eq!(classify_bucket("研究一下市场趋势"), Bucket::Analysis);
        assert_eq!(classify_bucket("给我一些logo设计的想法"), Bucket::Creative);
        assert_eq!(classify_bucket("translate this sentence"), Bucket::General);
    }

    #[test]
    fn test_priority_follows_rule_order() {
        // analysis keyword + creative keyword
        assert_eq!(classify_bucket("分析这个设计"), Bucket::Analysis);
        // coding keyword + analysis keyword
        assert_eq!(classify_bucket("开发一个数据分析工具"), Bucket::Coding);
    }

    #[test]
    fn test_empty_input_renders_general_template() {
        let output = fallback("");
        assert!(output.starts_with(&Bucket::General.heading()));
        assert!(output.contains("## 任务描述\n\n"));
    }

    #[test]
    fn test_input_is_interpolated_verbatim() {
        let input = "Write SOMETHING with MiXeD case";
        let output = fallback(input);
        assert!(output.contains("## 任务描述\nWrite SOMETHING with MiXeD case\n"));
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let input = "设计一个新的产品创意";
        assert_eq!(fallback(input), fallback(input));
    }

    #[test]
    fn test_render_layout() {
        let output = render(Bucket::Coding, "X");
        assert!(output.starts_with("# 编程任务增强提示词\n\n## 开发需求\nX\n\n## 技术要求\n"));
        assert!(output.ends_with("请按照以上标准完成编程任务。"));
    }
}
