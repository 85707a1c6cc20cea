//! Built-in document table
//!
//! The literal set of Amazon Bedrock documentation excerpts served by the
//! default registry. Loaded once at startup; never mutated at runtime.

use super::registry::Document;

fn document(id: &str, title: &str, body: &str, url: Option<&str>) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        url: url.map(str::to_string),
    }
}

/// The default document set, in serving order. The `overview` entry doubles
/// as the backing text for the `get_capabilities` tool.
pub fn default_documents() -> Vec<Document> {
    vec![
        document(
            "overview",
            "Amazon Bedrock Overview",
            "Amazon Bedrock is a fully managed service that offers a choice of \
             high-performing foundation models from leading AI companies through \
             a single API. It provides the capabilities you need to build \
             generative AI applications: text generation, chat, embeddings, \
             image generation, model evaluation, agents, knowledge bases, and \
             guardrails.\n\n\
             Because Bedrock is serverless, you don't have to manage any \
             infrastructure. You can privately customize foundation models with \
             your own data and integrate them into your applications using the \
             AWS tools you already know.",
            Some("https://docs.aws.amazon.com/bedrock/latest/userguide/what-is-bedrock.html"),
        ),
        document(
            "getting-started",
            "Getting Started with Amazon Bedrock",
            "To get started with Amazon Bedrock, first request access to the \
             foundation models you want to use from the model access page in \
             the AWS console. Model access is granted per region and per model \
             provider.\n\n\
             Once access is granted, you can experiment in the text, chat, and \
             image playgrounds, or call the InvokeModel and Converse APIs \
             directly with the AWS SDK or CLI. Standard AWS credentials and \
             IAM permissions apply to every request.",
            Some("https://docs.aws.amazon.com/bedrock/latest/userguide/getting-started.html"),
        ),
        document(
            "models",
            "Supported Foundation Models",
            "Amazon Bedrock offers foundation models from Amazon, Anthropic, \
             AI21 Labs, Cohere, Meta, Mistral AI, and Stability AI. The lineup \
             includes the Amazon Titan and Nova families, Anthropic Claude, \
             Meta Llama, Mistral, Cohere Command, and Stable Diffusion.\n\n\
             Each model has its own context window, modality support, and \
             per-region availability. The Converse API provides a consistent \
             request shape across text models, while model-specific inference \
             parameters remain available through InvokeModel.",
            Some("https://docs.aws.amazon.com/bedrock/latest/userguide/models-supported.html"),
        ),
        document(
            "agents",
            "Agents for Amazon Bedrock",
            "Agents for Amazon Bedrock orchestrate multi-step tasks by breaking \
             a user request into a plan, calling company APIs through action \
             groups, and consulting knowledge bases for supporting information.\n\n\
             An agent is configured with a foundation model, instructions that \
             describe its role, and optional action groups backed by Lambda \
             functions or OpenAPI schemas. Session state and trace output make \
             it possible to inspect each reasoning step.",
            Some("https://docs.aws.amazon.com/bedrock/latest/userguide/agents.html"),
        ),
        document(
            "knowledge-bases",
            "Knowledge Bases for Amazon Bedrock",
            "Knowledge Bases for Amazon Bedrock implement retrieval augmented \
             generation (RAG) as a managed workflow. You point a knowledge base \
             at a data source such as S3, pick an embeddings model, and Bedrock \
             handles chunking, embedding, and storage in a vector database.\n\n\
             At query time the Retrieve and RetrieveAndGenerate APIs return the \
             most relevant chunks, optionally synthesizing a grounded answer \
             with source attribution.",
            Some("https://docs.aws.amazon.com/bedrock/latest/userguide/knowledge-base.html"),
        ),
        document(
            "pricing",
            "Amazon Bedrock Pricing",
            "Amazon Bedrock charges for model inference and customization with \
             no upfront commitment. On-demand pricing is metered per input and \
             output token for text models, and per image for image models.\n\n\
             Provisioned Throughput offers discounted hourly pricing for \
             workloads that need guaranteed capacity, purchased in model units \
             with 1-month or 6-month commitment terms. Batch inference is \
             billed at a reduced per-token rate.",
            Some("https://aws.amazon.com/bedrock/pricing/"),
        ),
        document(
            "security",
            "Security in Amazon Bedrock",
            "Amazon Bedrock does not store or log your prompts and completions, \
             and does not use them to train AWS models or share them with model \
             providers. Data is encrypted in transit with TLS and at rest with \
             KMS keys you control.\n\n\
             Access is governed by IAM policies, and AWS PrivateLink lets you \
             keep traffic between your VPC and Bedrock off the public internet. \
             Bedrock is in scope for common compliance programs including SOC, \
             ISO, and HIPAA eligibility.",
            Some("https://docs.aws.amazon.com/bedrock/latest/userguide/security.html"),
        ),
    ]
}
