//! Built-in return-policy document.
//!
//! The body is rendered as a template before markdown conversion, so it can
//! reference `business.*` fields and the link filters.

pub const RETURN_POLICY: &str = r#"---
title: سياسة الإرجاع
description: شروط وإجراءات الإرجاع واسترداد المبالغ لخدمات الاستقدام.
slug: return-policy
order: 10
---

نحرص في {{ business.company_name }} على رضا العملاء وجودة الخدمات المقدَّمة. تُوضّح هذه السياسة شروط وإجراءات الإرجاع واسترداد المبالغ (إن وُجد) بما يتوافق مع الأنظمة المعمول بها في المملكة العربية السعودية.

## أولاً: نطاق السياسة

تنطبق هذه السياسة على الخدمات والعقود التي تُبرم مع {{ business.company_name }} والمتعلقة بخدمات الاستقدام. قد تختلف أحكام الإرجاع وفق نوع الخدمة، حالة الطلب، ومرحلة التنفيذ.

## ثانياً: حالات الاستحقاق

- في حال تعذّر تنفيذ الخدمة لأسباب غير راجعة للعميل.
- في حال الإلغاء ضمن المدد الزمنية المحددة بالعقد المبرم.
- في حال وجود خلل جوهري في تقديم الخدمة لا يمكن معالجته خلال مدة معقولة.

قد تُطبّق رسوم إدارية أو خصومات بحسب ما يتم توضيحه في العقد.

## ثالثاً: الحالات غير المشمولة

- إتمام الخدمة واستفادة العميل منها بشكل كامل وفق العقد.
- الإخلال بشروط الاستخدام أو التعليمات النظامية ذات الصلة.
- طلبات خارج ما تم الاتفاق عليه أو لا يشملها نطاق الخدمة.

## رابعاً: آلية طلب الإرجاع

1. التواصل معنا عبر القنوات الرسمية الموضحة أدناه.
2. تزويدنا بمعلومات الطلب وأسباب الإرجاع والمستندات المؤيدة.
3. دراسة الطلب والرد خلال مدة عمل معقولة.

## خامساً: استرداد المبالغ

في حال ثبوت الاستحقاق، يتم الاسترداد إلى وسيلة الدفع الأصلية خلال 7–14 يوم عمل من تاريخ اعتماد الطلب، ما لم يُنص في العقد على غير ذلك. تظهر المدة الفعلية بحسب البنك/مزود خدمة الدفع.

## سادساً: التواصل

لأي استفسار أو لبدء طلب الإرجاع، يُرجى التواصل معنا:

- العنوان: {{ business.address }}
- الهاتف: [{{ business.hotline }}]({{ business.hotline | tel }})
- البريد الإلكتروني: [{{ business.emails | first }}]({{ business.emails | first | mailto }})

## سابعاً: أحكام عامة

تحتفظ المنشأة بحق تحديث هذه السياسة من وقت لآخر بما يحقق الامتثال للأنظمة وتطور الخدمات. يسري أي تعديل من تاريخ نشره على هذه الصفحة.
"#;
